//! Named ABNF rules and their regex fragments.

use std::collections::BTreeSet;
use std::fmt;

/// The characters a rule's matches may contain.
pub type CharSet = BTreeSet<char>;

/// One ABNF production paired with the regex fragment that matches it.
///
/// Rules are plain values. Two rules compare equal when their fragments are
/// equal, so an alias is equal to the rule it renames.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Rule name as the RFC spells it, e.g. `TIME-OF-DAY`.
    pub name: &'static str,
    /// ABNF right-hand side.
    pub notation: &'static str,
    pub description: &'static str,
    /// Every character that can appear in text the rule matches.
    pub chars: CharSet,
    pub fragment: String,
}

impl Rule {
    pub fn new(
        name: &'static str,
        notation: &'static str,
        description: &'static str,
        fragment: impl Into<String>,
    ) -> Self {
        Self {
            name,
            notation,
            description,
            chars: CharSet::new(),
            fragment: fragment.into(),
        }
    }

    pub fn with_chars(self, chars: CharSet) -> Self {
        Self { chars, ..self }
    }

    /// Whether `ch` can appear anywhere in text this rule matches.
    pub fn admits(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Re-expose this rule under another name.
    pub fn alias(self, name: &'static str) -> Self {
        Self { name, ..self }
    }

    pub fn canonical_name(&self) -> String {
        canonical_name(self.name)
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.fragment == other.fragment
    }
}

impl Eq for Rule {}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.notation)
    }
}

/// Fold a rule name to its lookup key: ASCII uppercase, `-` read as `_`.
pub fn canonical_name(name: &str) -> String {
    name.chars()
        .map(|ch| match ch {
            '-' => '_',
            _ => ch.to_ascii_uppercase(),
        })
        .collect()
}

/// Characters allowed after the first letter of a rule identifier.
pub fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
}
