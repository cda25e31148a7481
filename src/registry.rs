//! Canonical-name index over the rules a grammar exposes.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::AbnfError;
use crate::grammar::Grammar;
use crate::rule::{Rule, canonical_name};

/// Every rule of one grammar, inherited ones included, keyed by canonical
/// name.
///
/// Built once per [`Composer`](crate::Composer). Lookups fold case and treat
/// `-` and `_` alike.
#[derive(Debug, Clone)]
pub struct Registry {
    grammar: &'static Grammar,
    rules: BTreeMap<String, Rule>,
    longest_key: usize,
}

impl Registry {
    /// Evaluate every accessor `grammar` exposes and index the results.
    pub fn discover(grammar: &'static Grammar) -> Self {
        let rules: BTreeMap<String, Rule> = grammar
            .accessors()
            .into_iter()
            .map(|(key, accessor)| (key.to_string(), accessor()))
            .collect();
        let longest_key = rules.keys().map(String::len).max().unwrap_or(0);
        debug!(grammar = grammar.name(), rules = rules.len(), "discovered rules");
        Self {
            grammar,
            rules,
            longest_key,
        }
    }

    pub fn grammar(&self) -> &'static Grammar {
        self.grammar
    }

    /// Resolve `name`, failing with [`AbnfError::RuleNotFound`].
    pub fn lookup(&self, name: &str) -> Result<&Rule, AbnfError> {
        let key = canonical_name(name);
        self.rules.get(&key).ok_or(AbnfError::RuleNotFound {
            name: key,
            grammar: self.grammar.name(),
        })
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(&canonical_name(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Longest registered name that `run` starts with, and its length in
    /// bytes. `run` must be ASCII identifier characters.
    pub fn longest_prefix(&self, run: &str) -> Option<(usize, &Rule)> {
        let max = run.len().min(self.longest_key);
        (1..=max)
            .rev()
            .find_map(|len| self.get(&run[..len]).map(|rule| (len, rule)))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Entries in canonical-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.rules.iter().map(|(key, rule)| (key.as_str(), rule))
    }
}
