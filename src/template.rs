//! Rule-reference substitution for pattern templates.
//!
//! A template is regex text with embedded references:
//!
//! | Token          | Replaced by                                  |
//! |----------------|----------------------------------------------|
//! | `:name`        | the rule's fragment                          |
//! | `:#name`       | fragment, then one comma-separated repeat    |
//!
//! Names fold case and treat `-` and `_` alike. After the marker, the
//! longest registered name that prefixes the identifier run is taken and the
//! rest of the run stays literal, so `:time-of-dayGMT` resolves
//! `time-of-day`. Tokens naming no rule are copied through untouched.

use tracing::trace;

use crate::registry::Registry;
use crate::rule::is_identifier_char;

/// Suffix appended to a comma-separated reference: `(?:OWS,OWS fragment)`.
///
/// The group is emitted once and left unquantified.
pub fn comma_suffix(ows: &str, fragment: &str) -> String {
    format!("(?:{ows},{ows}{fragment})")
}

/// Drop every ASCII whitespace character from `expr`. Other whitespace,
/// such as U+00A0, is kept as literal pattern text.
pub fn collapse_whitespace(expr: &str) -> String {
    expr.chars().filter(|ch| !ch.is_ascii_whitespace()).collect()
}

/// Replace each reference in `expr` with its fragment.
///
/// One left-to-right pass: inserted fragments are never scanned again.
pub fn resolve(registry: &Registry, ows: &str, expr: &str) -> String {
    let mut out = String::with_capacity(expr.len());
    let mut rest = expr;

    while let Some(colon) = rest.find(':') {
        out.push_str(&rest[..colon]);
        let after = &rest[colon + 1..];
        let (comma_separated, name_start) = match after.strip_prefix('#') {
            Some(name) => (true, name),
            None => (false, after),
        };
        let run_len = name_start
            .find(|ch: char| !is_identifier_char(ch))
            .unwrap_or(name_start.len());

        match registry.longest_prefix(&name_start[..run_len]) {
            Some((len, rule)) => {
                out.push_str(&rule.fragment);
                if comma_separated {
                    out.push_str(&comma_suffix(ows, &rule.fragment));
                }
                rest = &name_start[len..];
            }
            None => {
                if run_len > 0 {
                    let marker = usize::from(comma_separated);
                    trace!(
                        token = &rest[colon..=colon + marker + run_len],
                        grammar = registry.grammar().name(),
                        "unresolved rule reference"
                    );
                }
                out.push(':');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use phf::phf_ordered_map;

    use super::*;
    use crate::grammar::{
        CORE, Grammar, RFC3986, RFC9110, RuleFn, RuleTable, rfc3986, rfc5234, rfc9110,
    };
    use crate::rule::Rule;

    fn ows() -> String {
        rfc5234::ows().fragment
    }

    fn resolve_with(registry: &Registry, expr: &str) -> String {
        resolve(registry, &ows(), expr)
    }

    #[test]
    fn plain_text_is_unchanged() {
        let registry = Registry::discover(&CORE);
        assert_eq!(resolve_with(&registry, ""), "");
        assert_eq!(resolve_with(&registry, "abc[0-9]+"), "abc[0-9]+");
        assert_eq!(resolve_with(&registry, "(?:x)"), "(?:x)");
    }

    #[test]
    fn single_reference() {
        let registry = Registry::discover(&CORE);
        assert_eq!(resolve_with(&registry, ":digit"), rfc5234::digit().fragment);
        assert_eq!(
            resolve_with(&registry, "a:SP+b"),
            format!("a{}+b", rfc5234::sp().fragment)
        );
    }

    #[test]
    fn reference_after_non_capturing_group_marker() {
        let registry = Registry::discover(&CORE);
        assert_eq!(
            resolve_with(&registry, "(?::digit)*"),
            format!("(?:{})*", rfc5234::digit().fragment)
        );
    }

    #[test]
    fn comma_separated_reference() {
        let registry = Registry::discover(&CORE);
        let digit = rfc5234::digit().fragment;
        assert_eq!(
            resolve_with(&registry, ":#digit"),
            format!("{digit}(?:{ows},{ows}{digit})", ows = ows())
        );
    }

    #[test]
    fn unknown_tokens_pass_through() {
        let registry = Registry::discover(&RFC9110);
        assert_eq!(resolve_with(&registry, ":doesnotexist"), ":doesnotexist");
        assert_eq!(resolve_with(&registry, ":#nothing"), ":#nothing");
        assert_eq!(resolve_with(&registry, "a::b"), "a::b");
        assert_eq!(resolve_with(&registry, "trailing:"), "trailing:");
        assert_eq!(resolve_with(&registry, ":#"), ":#");
    }

    #[test]
    fn unknown_token_does_not_hide_following_reference() {
        let registry = Registry::discover(&CORE);
        assert_eq!(
            resolve_with(&registry, ":nope:digit"),
            format!(":nope{}", rfc5234::digit().fragment)
        );
    }

    #[test]
    fn longest_name_wins() {
        let registry = Registry::discover(&RFC3986);
        assert_eq!(
            resolve_with(&registry, ":path-abempty"),
            rfc3986::path_abempty().fragment
        );
        assert_eq!(resolve_with(&registry, ":path"), rfc3986::path().fragment);
        assert_eq!(
            resolve_with(&registry, ":segment-nz-nc/"),
            rfc3986::segment_nz_nc().fragment + "/"
        );
    }

    #[test]
    fn tail_of_identifier_run_stays_literal() {
        let registry = Registry::discover(&RFC9110);
        assert_eq!(
            resolve_with(&registry, ":time-of-dayGMT"),
            rfc9110::time_of_day().fragment + "GMT"
        );
    }

    fn colon_rule() -> Rule {
        Rule::new("A", "\":b\"", "fragment that looks like a reference", ":b")
    }

    fn b_rule() -> Rule {
        Rule::new("B", "\"b\"", "letter b", "[b]")
    }

    static LOOKALIKE_RULES: RuleTable = phf_ordered_map! {
        "A" => colon_rule as RuleFn,
        "B" => b_rule as RuleFn,
    };

    static LOOKALIKE: Grammar = Grammar::new("LOOKALIKE", None, &LOOKALIKE_RULES);

    #[test]
    fn inserted_fragments_are_not_rescanned() {
        let registry = Registry::discover(&LOOKALIKE);
        assert_eq!(resolve_with(&registry, ":a"), ":b");
        assert_eq!(resolve_with(&registry, ":a:b"), ":b[b]");
        assert_eq!(resolve_with(&registry, ":#a"), format!(":b(?:{0},{0}:b)", ows()));
    }

    #[test]
    fn references_are_case_and_separator_insensitive() {
        let registry = Registry::discover(&RFC9110);
        let expected = rfc9110::quoted_string().fragment;
        for token in [":quoted-string", ":QUOTED_STRING", ":Quoted_string"] {
            assert_eq!(resolve_with(&registry, token), expected, "{token}");
        }
    }

    #[test]
    fn collapse_removes_all_whitespace() {
        assert_eq!(collapse_whitespace("a  b"), "ab");
        assert_eq!(collapse_whitespace(" :tchar\t(?: :digit )*\n"), ":tchar(?::digit)*");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn collapse_keeps_non_ascii_whitespace() {
        assert_eq!(collapse_whitespace("a\u{00A0}b"), "a\u{00A0}b");
        assert_eq!(collapse_whitespace(" a\u{2003}\r\n"), "a\u{2003}");
    }
}
