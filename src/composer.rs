//! Fluent construction of one regex pattern from grammar rules.

use std::fmt;

use tracing::debug;

use crate::error::AbnfError;
use crate::grammar::{Grammar, Spec, rfc5234};
use crate::registry::Registry;
use crate::template;

/// A regex quantifier suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    ZeroOrOne,
    ZeroOrMore,
    OneOrMore,
    Exactly(usize),
    AtLeast(usize),
    Between(usize, usize),
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroOrOne => f.write_str("?"),
            Self::ZeroOrMore => f.write_str("*"),
            Self::OneOrMore => f.write_str("+"),
            Self::Exactly(n) => write!(f, "{{{n}}}"),
            Self::AtLeast(n) => write!(f, "{{{n},}}"),
            Self::Between(min, max) => write!(f, "{{{min},{max}}}"),
        }
    }
}

/// Builds a pattern by appending rule fragments, literal text, groups and
/// quantifiers to a buffer. Nothing is ever removed from the buffer.
///
/// ```
/// use abnf_regex::{Composer, RFC9110};
///
/// let mut composer = Composer::new(&RFC9110);
/// composer.literal("^").reference("digit")?.one_or_more().literal("$");
/// assert_eq!(composer.build(), r"^[\x30-\x39]+$");
/// # Ok::<(), abnf_regex::AbnfError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Composer {
    registry: Registry,
    ows: String,
    pattern: String,
}

impl Composer {
    pub fn new(grammar: &'static Grammar) -> Self {
        Self {
            registry: Registry::discover(grammar),
            ows: rfc5234::ows().fragment,
            pattern: String::new(),
        }
    }

    /// Composer for the built-in grammar called `name` (`"rfc9110"`, ...).
    pub fn for_spec_name(name: &str) -> Result<Self, AbnfError> {
        let spec: Spec = name.parse()?;
        Ok(Self::new(spec.grammar()))
    }

    pub fn grammar(&self) -> &'static Grammar {
        self.registry.grammar()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Append `text` verbatim.
    pub fn literal(&mut self, text: &str) -> &mut Self {
        self.pattern.push_str(text);
        self
    }

    /// Append the fragment of rule `name`.
    pub fn reference(&mut self, name: &str) -> Result<&mut Self, AbnfError> {
        let rule = self.registry.lookup(name)?;
        debug!(rule = rule.name, "reference");
        self.pattern.push_str(&rule.fragment);
        Ok(self)
    }

    /// Append the fragment of rule `name` followed by one
    /// `(?:OWS,OWS fragment)` group.
    ///
    /// The trailing group is not quantified: it admits exactly one more
    /// item.
    pub fn reference_comma_separated(&mut self, name: &str) -> Result<&mut Self, AbnfError> {
        let rule = self.registry.lookup(name)?;
        debug!(rule = rule.name, "comma-separated reference");
        self.pattern.push_str(&rule.fragment);
        self.pattern
            .push_str(&template::comma_suffix(&self.ows, &rule.fragment));
        Ok(self)
    }

    /// Append `(?:inner)`.
    pub fn group(&mut self, inner: impl AsRef<str>) -> &mut Self {
        self.pattern.push_str("(?:");
        self.pattern.push_str(inner.as_ref());
        self.pattern.push(')');
        self
    }

    /// Append `(?<name>inner)`, or `(inner)` without a name.
    pub fn capture_group(&mut self, inner: impl AsRef<str>, name: Option<&str>) -> &mut Self {
        self.pattern.push('(');
        if let Some(name) = name {
            self.pattern.push_str("?<");
            self.pattern.push_str(name);
            self.pattern.push('>');
        }
        self.pattern.push_str(inner.as_ref());
        self.pattern.push(')');
        self
    }

    pub fn quantify(&mut self, quantifier: Quantifier) -> &mut Self {
        self.pattern.push_str(&quantifier.to_string());
        self
    }

    pub fn optional(&mut self) -> &mut Self {
        self.quantify(Quantifier::ZeroOrOne)
    }

    pub fn zero_or_more(&mut self) -> &mut Self {
        self.quantify(Quantifier::ZeroOrMore)
    }

    pub fn one_or_more(&mut self) -> &mut Self {
        self.quantify(Quantifier::OneOrMore)
    }

    /// `{min}` when `max` is `None`, `{min,}` when it is `usize::MAX`,
    /// otherwise `{min,max}`.
    pub fn repeat(&mut self, min: usize, max: Option<usize>) -> &mut Self {
        self.quantify(match max {
            None => Quantifier::Exactly(min),
            Some(usize::MAX) => Quantifier::AtLeast(min),
            Some(max) => Quantifier::Between(min, max),
        })
    }

    pub fn repeat_at_least(&mut self, min: usize) -> &mut Self {
        self.quantify(Quantifier::AtLeast(min))
    }

    /// Resolve `:name` and `:#name` references in `expr` after stripping
    /// its whitespace, and append the result.
    pub fn from_template(&mut self, expr: &str) -> &mut Self {
        self.from_template_with(expr, true)
    }

    /// Like [`Composer::from_template`], optionally keeping whitespace.
    ///
    /// Unknown references are copied through as written; this never fails.
    pub fn from_template_with(&mut self, expr: &str, collapse_whitespace: bool) -> &mut Self {
        let resolved = if collapse_whitespace {
            template::resolve(
                &self.registry,
                &self.ows,
                &template::collapse_whitespace(expr),
            )
        } else {
            template::resolve(&self.registry, &self.ows, expr)
        };
        self.pattern.push_str(&resolved);
        self
    }

    /// The pattern built so far.
    pub fn build(&self) -> String {
        self.pattern.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

impl AsRef<str> for Composer {
    fn as_ref(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Display for Composer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
