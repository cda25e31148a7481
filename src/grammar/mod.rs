//! Built-in grammar providers.
//!
//! A [`Grammar`] is a static table of rule accessors keyed by canonical
//! name. Accessors are plain `fn() -> Rule` items, so rules compose by
//! calling each other, across grammars where one RFC reuses another.
//!
//! | Grammar    | Base  | Covers                                          |
//! |------------|-------|-------------------------------------------------|
//! | [`CORE`]   |       | RFC 5234 core rules, RFC 9110 OWS/RWS/BWS       |
//! | [`RFC3986`]| CORE  | URI generic syntax                              |
//! | [`RFC9110`]| CORE  | HTTP tokens, quoted text, dates, fields, URIs   |

use std::fmt;
use std::str::FromStr;

use phf::OrderedMap;

use crate::error::AbnfError;
use crate::rule::{Rule, canonical_name};

pub mod rfc3986;
pub mod rfc5234;
pub mod rfc9110;

/// Zero-argument, side-effect-free rule accessor.
pub type RuleFn = fn() -> Rule;

/// Table of accessors keyed by canonical rule name.
pub type RuleTable = OrderedMap<&'static str, RuleFn>;

/// A named set of rules from one RFC, optionally layered on a base grammar.
///
/// Rules of the `base` grammar are inherited; an entry in `rules` with the
/// same key shadows the inherited one.
pub struct Grammar {
    name: &'static str,
    base: Option<&'static Grammar>,
    rules: &'static RuleTable,
}

impl Grammar {
    pub const fn new(
        name: &'static str,
        base: Option<&'static Grammar>,
        rules: &'static RuleTable,
    ) -> Self {
        Self { name, base, rules }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn base(&self) -> Option<&'static Grammar> {
        self.base
    }

    /// Every accessor this grammar exposes, inherited ones first, in table
    /// order. Shadowed base entries are still listed; later entries win
    /// when indexed by key.
    pub fn accessors(&self) -> Vec<(&'static str, RuleFn)> {
        let mut all = self.base.map(Grammar::accessors).unwrap_or_default();
        all.extend(self.rules.entries().map(|(key, accessor)| (*key, *accessor)));
        all
    }

    /// Evaluate the accessor registered under `name`, if any.
    pub fn rule(&self, name: &str) -> Option<Rule> {
        let key = canonical_name(name);
        self.accessor(&key).map(|accessor| accessor())
    }

    fn accessor(&self, key: &str) -> Option<RuleFn> {
        self.rules
            .get(key)
            .copied()
            .or_else(|| self.base.and_then(|base| base.accessor(key)))
    }
}

impl fmt::Debug for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grammar")
            .field("name", &self.name)
            .field("base", &self.base.map(Grammar::name))
            .field("rules", &self.rules.len())
            .finish()
    }
}

/// RFC 5234 core rules plus the RFC 9110 whitespace rules.
pub static CORE: Grammar = Grammar::new("CORE", None, &rfc5234::RULES);

/// RFC 3986, Uniform Resource Identifier: Generic Syntax.
pub static RFC3986: Grammar = Grammar::new("RFC3986", Some(&CORE), &rfc3986::RULES);

/// RFC 9110, HTTP Semantics.
pub static RFC9110: Grammar = Grammar::new("RFC9110", Some(&CORE), &rfc9110::RULES);

/// The built-in grammars by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spec {
    Core,
    Rfc3986,
    Rfc9110,
}

impl Spec {
    pub const ALL: [Spec; 3] = [Spec::Core, Spec::Rfc3986, Spec::Rfc9110];

    pub fn grammar(self) -> &'static Grammar {
        match self {
            Spec::Core => &CORE,
            Spec::Rfc3986 => &RFC3986,
            Spec::Rfc9110 => &RFC9110,
        }
    }
}

impl FromStr for Spec {
    type Err = AbnfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Spec::ALL
            .into_iter()
            .find(|spec| spec.grammar().name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AbnfError::UnknownGrammar(s.to_string()))
    }
}

impl fmt::Display for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.grammar().name().to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_grammars_inherit_core() {
        for grammar in [&RFC3986, &RFC9110] {
            assert_eq!(grammar.base().map(Grammar::name), Some("CORE"));
            assert_eq!(grammar.rule("ows"), CORE.rule("OWS"));
            assert_eq!(grammar.rule("digit"), Some(rfc5234::digit()));
        }
        assert!(CORE.base().is_none());
    }

    #[test]
    fn accessors_list_base_rules_first() {
        let accessors = RFC3986.accessors();
        let core_len = CORE.accessors().len();
        assert_eq!(accessors[0].0, "ALPHA");
        assert_eq!(accessors[core_len].0, "URI");
        assert_eq!(accessors.len(), core_len + rfc3986::RULES.len());
    }

    #[test]
    fn table_keys_are_canonical_names_of_their_rules() {
        for spec in Spec::ALL {
            for (key, accessor) in spec.grammar().accessors() {
                assert_eq!(
                    canonical_name(accessor().name),
                    key,
                    "{spec}: table key does not match rule name"
                );
            }
        }
    }

    #[test]
    fn rule_lookup_folds_case_and_separators() {
        let a = RFC9110.rule("time-of-day").unwrap();
        let b = RFC9110.rule("TIME_OF_DAY").unwrap();
        let c = RFC9110.rule("Time-Of_Day").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert!(RFC9110.rule("time of day").is_none());
    }

    #[test]
    fn spec_parses_by_name() {
        assert_eq!("rfc9110".parse::<Spec>(), Ok(Spec::Rfc9110));
        assert_eq!("RFC3986".parse::<Spec>(), Ok(Spec::Rfc3986));
        assert_eq!(" core ".parse::<Spec>(), Ok(Spec::Core));
        assert_eq!(
            "rfc7230".parse::<Spec>(),
            Err(AbnfError::UnknownGrammar("rfc7230".to_string()))
        );
    }

    #[test]
    fn spec_display_round_trips() {
        for spec in Spec::ALL {
            assert_eq!(spec.to_string().parse::<Spec>(), Ok(spec));
        }
    }
}
