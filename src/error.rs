use thiserror::Error;

/// Errors raised by explicit rule references and grammar selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbnfError {
    /// An explicit reference named a rule the bound grammar does not define.
    #[error("{grammar} does not define ABNF rule '{name}'")]
    RuleNotFound { name: String, grammar: &'static str },

    /// No built-in grammar goes by this name.
    #[error("unknown grammar '{0}' (expected one of: core, rfc3986, rfc9110)")]
    UnknownGrammar(String),
}
