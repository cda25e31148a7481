//! RFC 5234 appendix B.1 core rules, plus the whitespace rules of RFC 9110
//! section 5.6.3 that every other grammar builds on.

use phf::phf_ordered_map;

use super::{RuleFn, RuleTable};
use crate::fragment::{any_of, char_range, chars_of, hex_char, hex_range, unique_chars};
use crate::rule::Rule;

/// Keep keys in canonical form (uppercase, `_` for `-`).
pub static RULES: RuleTable = phf_ordered_map! {
    "ALPHA" => alpha as RuleFn,
    "BIT" => bit as RuleFn,
    "CHAR" => ascii_char as RuleFn,
    "CR" => cr as RuleFn,
    "CRLF" => crlf as RuleFn,
    "CTL" => ctl as RuleFn,
    "DIGIT" => digit as RuleFn,
    "DQUOTE" => dquote as RuleFn,
    "HEXDIG" => hexdig as RuleFn,
    "HTAB" => htab as RuleFn,
    "LF" => lf as RuleFn,
    "LWSP" => lwsp as RuleFn,
    "OCTET" => octet as RuleFn,
    "SP" => sp as RuleFn,
    "VCHAR" => vchar as RuleFn,
    "WSP" => wsp as RuleFn,
    "OWS" => ows as RuleFn,
    "RWS" => rws as RuleFn,
    "BWS" => bws as RuleFn,
};

pub fn alpha() -> Rule {
    Rule::new(
        "ALPHA",
        "%x41-5A / %x61-7A",
        "A-Z / a-z",
        r"[\x41-\x5A\x61-\x7A]",
    )
    .with_chars(unique_chars([char_range('A', 'Z'), char_range('a', 'z')]))
}

pub fn bit() -> Rule {
    Rule::new("BIT", r#""0" / "1""#, "zero or one", "[01]").with_chars(chars_of("01"))
}

pub fn ascii_char() -> Rule {
    Rule::new(
        "CHAR",
        "%x01-7F",
        "any 7-bit US-ASCII character, excluding NUL",
        hex_range(0x01, 0x7F),
    )
    .with_chars(char_range('\x01', '\x7F'))
}

pub fn cr() -> Rule {
    Rule::new("CR", "%x0D", "carriage return", hex_char(0x0D)).with_chars(chars_of("\r"))
}

pub fn crlf() -> Rule {
    let (cr, lf) = (cr(), lf());
    Rule::new(
        "CRLF",
        "CR LF",
        "Internet standard newline",
        cr.fragment + &lf.fragment,
    )
    .with_chars(unique_chars([cr.chars, lf.chars]))
}

pub fn ctl() -> Rule {
    Rule::new("CTL", "%x00-1F / %x7F", "controls", r"[\x00-\x1F\x7F]")
        .with_chars(unique_chars([char_range('\x00', '\x1F'), chars_of("\x7F")]))
}

pub fn digit() -> Rule {
    Rule::new("DIGIT", "%x30-39", "0-9", hex_range(0x30, 0x39)).with_chars(char_range('0', '9'))
}

pub fn dquote() -> Rule {
    Rule::new("DQUOTE", "%x22", "\" (Double Quote)", hex_char(0x22)).with_chars(chars_of("\""))
}

pub fn hexdig() -> Rule {
    Rule::new(
        "HEXDIG",
        r#"DIGIT / "A" / "B" / "C" / "D" / "E" / "F""#,
        "hexadecimal digit; ABNF strings are case-insensitive",
        "[0-9A-Fa-f]",
    )
    .with_chars(unique_chars([digit().chars, chars_of("ABCDEFabcdef")]))
}

pub fn htab() -> Rule {
    Rule::new("HTAB", "%x09", "horizontal tab", hex_char(0x09)).with_chars(chars_of("\t"))
}

pub fn lf() -> Rule {
    Rule::new("LF", "%x0A", "linefeed", hex_char(0x0A)).with_chars(chars_of("\n"))
}

pub fn lwsp() -> Rule {
    let (wsp, crlf) = (wsp(), crlf());
    Rule::new(
        "LWSP",
        "*(WSP / CRLF WSP)",
        "linear white space (past newline)",
        any_of([wsp.fragment.clone(), crlf.fragment + &wsp.fragment]) + "*",
    )
    .with_chars(unique_chars([wsp.chars, crlf.chars]))
}

pub fn octet() -> Rule {
    Rule::new("OCTET", "%x00-FF", "8 bits of data", hex_range(0x00, 0xFF))
        .with_chars(char_range('\x00', '\u{FF}'))
}

pub fn sp() -> Rule {
    Rule::new("SP", "%x20", "space", hex_char(0x20)).with_chars(chars_of(" "))
}

pub fn vchar() -> Rule {
    Rule::new(
        "VCHAR",
        "%x21-7E",
        "visible (printing) characters",
        hex_range(0x21, 0x7E),
    )
    .with_chars(char_range('!', '~'))
}

pub fn wsp() -> Rule {
    let (sp, htab) = (sp(), htab());
    Rule::new(
        "WSP",
        "SP / HTAB",
        "white space",
        format!("[{}{}]", sp.fragment, htab.fragment),
    )
    .with_chars(unique_chars([sp.chars, htab.chars]))
}

pub fn ows() -> Rule {
    let wsp = wsp();
    Rule::new(
        "OWS",
        "*( SP / HTAB )",
        "optional whitespace",
        wsp.fragment + "*",
    )
    .with_chars(wsp.chars)
}

pub fn rws() -> Rule {
    let wsp = wsp();
    Rule::new(
        "RWS",
        "1*( SP / HTAB )",
        "required whitespace",
        wsp.fragment + "+",
    )
    .with_chars(wsp.chars)
}

pub fn bws() -> Rule {
    Rule {
        notation: "OWS",
        description: "\"bad\" whitespace",
        ..ows().alias("BWS")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn full_match(rule: Rule) -> Regex {
        Regex::new(&format!("^(?:{})$", rule.fragment)).unwrap()
    }

    #[test]
    fn fragments() {
        assert_eq!(digit().fragment, r"[\x30-\x39]");
        assert_eq!(wsp().fragment, r"[\x20\x09]");
        assert_eq!(ows().fragment, r"[\x20\x09]*");
        assert_eq!(crlf().fragment, r"\x0D\x0A");
        assert_eq!(lwsp().fragment, r"(?:[\x20\x09]|\x0D\x0A[\x20\x09])*");
    }

    #[test]
    fn bws_is_an_alias_of_ows() {
        assert_eq!(bws(), ows());
        assert_eq!(bws().name, "BWS");
        assert_eq!(bws().notation, "OWS");
    }

    #[test]
    fn every_rule_compiles() {
        for (key, accessor) in RULES.entries() {
            let rule = accessor();
            assert!(
                Regex::new(&rule.fragment).is_ok(),
                "{key} does not compile: {}",
                rule.fragment
            );
        }
    }

    #[test]
    fn alpha_and_digit() {
        let alpha = full_match(alpha());
        assert!(alpha.is_match("a"));
        assert!(alpha.is_match("Z"));
        assert!(!alpha.is_match("5"));
        assert!(!alpha.is_match("["));

        let digit = full_match(digit());
        assert!(digit.is_match("7"));
        assert!(!digit.is_match("a"));
    }

    #[test]
    fn hexdig_accepts_both_cases() {
        let hexdig = full_match(hexdig());
        for s in ["0", "9", "a", "F"] {
            assert!(hexdig.is_match(s), "expected hexdig: {s}");
        }
        assert!(!hexdig.is_match("g"));
    }

    #[test]
    fn whitespace_rules() {
        let ows = full_match(ows());
        assert!(ows.is_match(""));
        assert!(ows.is_match(" \t "));
        assert!(!ows.is_match("\n"));

        let rws = full_match(rws());
        assert!(!rws.is_match(""));
        assert!(rws.is_match("\t"));

        let lwsp = full_match(lwsp());
        assert!(lwsp.is_match(" \r\n\t"));
        assert!(!lwsp.is_match("\r\n"));
    }

    #[test]
    fn ctl_and_vchar_are_disjoint() {
        let ctl = full_match(ctl());
        let vchar = full_match(vchar());
        for s in ["\x00", "\x1F", "\x7F"] {
            assert!(ctl.is_match(s));
            assert!(!vchar.is_match(s));
        }
        for s in ["!", "~", "A"] {
            assert!(vchar.is_match(s));
            assert!(!ctl.is_match(s));
        }
    }

    #[test]
    fn every_rule_admits_characters() {
        for (key, accessor) in RULES.entries() {
            assert!(!accessor().chars.is_empty(), "{key} admits no characters");
        }
    }

    #[test]
    fn single_character_rules_agree_with_their_chars() {
        for rule in [alpha(), bit(), ascii_char(), ctl(), digit(), hexdig(), octet(), vchar(), wsp()] {
            let re = full_match(rule.clone());
            for ch in '\x00'..='\u{FF}' {
                assert_eq!(
                    re.is_match(ch.encode_utf8(&mut [0; 4])),
                    rule.admits(ch),
                    "{}: {ch:?}",
                    rule.name
                );
            }
        }
    }

    #[test]
    fn composite_chars_are_unions() {
        assert_eq!(crlf().chars, chars_of("\r\n"));
        assert_eq!(lwsp().chars, chars_of(" \t\r\n"));
        assert_eq!(ows().chars, chars_of(" \t"));
        assert_eq!(bws().chars, ows().chars);
        assert!(hexdig().admits('f') && hexdig().admits('F'));
        assert_eq!(alpha().chars.len(), 52);
        assert_eq!(octet().chars.len(), 256);
        assert!(!ctl().admits(' ') && ctl().admits('\x7F'));
    }
}
