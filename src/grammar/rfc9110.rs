//! RFC 9110 HTTP semantics: tokens, quoted text, dates, fields, parameters,
//! entity tags and the http/https URI schemes.
//!
//! URI components are re-exposed from [`super::rfc3986`] unchanged.

use phf::phf_ordered_map;

use super::rfc3986;
use super::rfc5234::{alpha, digit, dquote, htab, ows, sp, vchar};
use super::{RuleFn, RuleTable};
use crate::fragment::{any_of, char_range, chars_of, hex_char, hex_range, unique_chars};
use crate::rule::Rule;

pub static RULES: RuleTable = phf_ordered_map! {
    "TCHAR" => tchar as RuleFn,
    "TOKEN" => token as RuleFn,
    "OBS_TEXT" => obs_text as RuleFn,
    "QUOTED_STRING" => quoted_string as RuleFn,
    "QDTEXT" => qdtext as RuleFn,
    "QUOTED_PAIR" => quoted_pair as RuleFn,
    "COMMENT" => comment as RuleFn,
    "CTEXT" => ctext as RuleFn,
    "HTTP_DATE" => http_date as RuleFn,
    "DATE" => date as RuleFn,
    "IMF_FIXDATE" => imf_fixdate as RuleFn,
    "DATE1" => date1 as RuleFn,
    "DAY_NAME" => day_name as RuleFn,
    "DAY" => day as RuleFn,
    "MONTH" => month as RuleFn,
    "YEAR" => year as RuleFn,
    "TIME_OF_DAY" => time_of_day as RuleFn,
    "HOUR" => hour as RuleFn,
    "MINUTE" => minute as RuleFn,
    "SECOND" => second as RuleFn,
    "GMT" => gmt as RuleFn,
    "OBS_DATE" => obs_date as RuleFn,
    "RFC850_DATE" => rfc850_date as RuleFn,
    "DAY_NAME_L" => day_name_l as RuleFn,
    "DATE2" => date2 as RuleFn,
    "ASCTIME_DATE" => asctime_date as RuleFn,
    "DATE3" => date3 as RuleFn,
    "ETAG" => etag as RuleFn,
    "ENTITY_TAG" => entity_tag as RuleFn,
    "WEAK" => weak as RuleFn,
    "OPAQUE_TAG" => opaque_tag as RuleFn,
    "ETAGC" => etagc as RuleFn,
    "FIELD_NAME" => field_name as RuleFn,
    "FIELD_VALUE" => field_value as RuleFn,
    "FIELD_CONTENT" => field_content as RuleFn,
    "FIELD_VCHAR" => field_vchar as RuleFn,
    "PARAMETERS" => parameters as RuleFn,
    "PARAMETER" => parameter as RuleFn,
    "PARAMETER_NAME" => parameter_name as RuleFn,
    "PARAMETER_VALUE" => parameter_value as RuleFn,
    "URI_REFERENCE" => rfc3986::uri_reference as RuleFn,
    "ABSOLUTE_URI" => rfc3986::absolute_uri as RuleFn,
    "RELATIVE_PART" => rfc3986::relative_part as RuleFn,
    "AUTHORITY" => rfc3986::authority as RuleFn,
    "HOST" => rfc3986::host as RuleFn,
    "URI_HOST" => uri_host as RuleFn,
    "PORT" => rfc3986::port as RuleFn,
    "PATH_ABEMPTY" => rfc3986::path_abempty as RuleFn,
    "SEGMENT" => rfc3986::segment as RuleFn,
    "QUERY" => rfc3986::query as RuleFn,
    "PATH_ABSOLUTE" => rfc3986::path_absolute as RuleFn,
    "ABSOLUTE_PATH" => absolute_path as RuleFn,
    "PARTIAL_URI" => partial_uri as RuleFn,
    "HTTP_URI" => http_uri as RuleFn,
    "HTTPS_URI" => https_uri as RuleFn,
};

// Tokens and quoted text (section 5.6)

pub fn tchar() -> Rule {
    Rule::new(
        "TCHAR",
        r##""!" / "#" / "$" / "%" / "&" / "'" / "*" / "+" / "-" / "." / "^" / "_" / "`" / "|" / "~" / DIGIT / ALPHA"##,
        "any VCHAR, except delimiters",
        r"[!#$%&'*+\-.^_`|~0-9A-Za-z]",
    )
    .with_chars(unique_chars([
        digit().chars,
        alpha().chars,
        chars_of("!#$%&'*+-.^_`|~"),
    ]))
}

pub fn token() -> Rule {
    let tchar = tchar();
    Rule::new("TOKEN", "1*tchar", "one or more tchar", tchar.fragment + "+").with_chars(tchar.chars)
}

pub fn obs_text() -> Rule {
    Rule::new("OBS-TEXT", "%x80-FF", "obsolete text", hex_range(0x80, 0xFF))
        .with_chars(char_range('\u{80}', '\u{FF}'))
}

pub fn quoted_string() -> Rule {
    let (dquote, qdtext, quoted_pair) = (dquote(), qdtext(), quoted_pair());
    Rule::new(
        "QUOTED-STRING",
        "DQUOTE *( qdtext / quoted-pair ) DQUOTE",
        "double-quoted text with backslash escapes",
        format!(
            "{0}{1}*{0}",
            dquote.fragment,
            any_of([qdtext.fragment, quoted_pair.fragment])
        ),
    )
    .with_chars(unique_chars([dquote.chars, qdtext.chars, quoted_pair.chars]))
}

pub fn qdtext() -> Rule {
    let (htab, sp, obs_text) = (htab(), sp(), obs_text());
    Rule::new(
        "QDTEXT",
        "HTAB / SP / %x21 / %x23-5B / %x5D-7E / obs-text",
        "quoted-string text: no DQUOTE or backslash",
        any_of([
            htab.fragment,
            sp.fragment,
            hex_char(0x21),
            hex_range(0x23, 0x5B),
            hex_range(0x5D, 0x7E),
            obs_text.fragment,
        ]),
    )
    .with_chars(unique_chars([
        htab.chars,
        sp.chars,
        chars_of("!"),
        char_range('#', '['),
        char_range(']', '~'),
        obs_text.chars,
    ]))
}

pub fn quoted_pair() -> Rule {
    let (htab, sp, vchar, obs_text) = (htab(), sp(), vchar(), obs_text());
    Rule::new(
        "QUOTED-PAIR",
        r#""\" ( HTAB / SP / VCHAR / obs-text )"#,
        "backslash-escaped octet",
        format!(
            r"\\{}",
            any_of([htab.fragment, sp.fragment, vchar.fragment, obs_text.fragment])
        ),
    )
    .with_chars(unique_chars([
        htab.chars,
        sp.chars,
        vchar.chars,
        obs_text.chars,
        chars_of("\\"),
    ]))
}

/// Comments nest in ABNF, which a regular expression cannot follow; this
/// fragment admits one level of nested comment.
pub fn comment() -> Rule {
    let (ctext, quoted_pair) = (ctext(), quoted_pair());
    let text = any_of([ctext.fragment.clone(), quoted_pair.fragment.clone()]);
    Rule::new(
        "COMMENT",
        r#""(" *( ctext / quoted-pair / comment ) ")""#,
        "parenthesised comment, nested at most one level",
        format!(
            r"\({}*\)",
            any_of([
                ctext.fragment,
                quoted_pair.fragment,
                format!(r"\({text}*\)"),
            ])
        ),
    )
    .with_chars(unique_chars([ctext.chars, quoted_pair.chars, chars_of("()")]))
}

pub fn ctext() -> Rule {
    let (htab, sp, obs_text) = (htab(), sp(), obs_text());
    Rule::new(
        "CTEXT",
        "HTAB / SP / %x21-27 / %x2A-5B / %x5D-7E / obs-text",
        "comment text: no parentheses or backslash",
        any_of([
            htab.fragment,
            sp.fragment,
            hex_range(0x21, 0x27),
            hex_range(0x2A, 0x5B),
            hex_range(0x5D, 0x7E),
            obs_text.fragment,
        ]),
    )
    .with_chars(unique_chars([
        htab.chars,
        sp.chars,
        char_range('!', '\''),
        char_range('*', '['),
        char_range(']', '~'),
        obs_text.chars,
    ]))
}

// Date/time formats (section 5.6.7)

pub fn http_date() -> Rule {
    let (imf_fixdate, obs_date) = (imf_fixdate(), obs_date());
    Rule::new(
        "HTTP-DATE",
        "IMF-fixdate / obs-date",
        "preferred or obsolete HTTP date",
        any_of([imf_fixdate.fragment, obs_date.fragment]),
    )
    .with_chars(unique_chars([imf_fixdate.chars, obs_date.chars]))
}

pub fn date() -> Rule {
    Rule {
        notation: "HTTP-date",
        description: "Date header field value",
        ..http_date().alias("DATE")
    }
}

pub fn imf_fixdate() -> Rule {
    let (day_name, date1, time_of_day, gmt, sp) = (day_name(), date1(), time_of_day(), gmt(), sp());
    Rule::new(
        "IMF-FIXDATE",
        r#"day-name "," SP date1 SP time-of-day SP GMT"#,
        "fixed-length, GMT subset of the Internet Message Format date",
        format!(
            "{},{sp}{}{sp}{}{sp}{}",
            day_name.fragment,
            date1.fragment,
            time_of_day.fragment,
            gmt.fragment,
            sp = sp.fragment,
        ),
    )
    .with_chars(unique_chars([
        day_name.chars,
        date1.chars,
        time_of_day.chars,
        gmt.chars,
        sp.chars,
        chars_of(","),
    ]))
}

pub fn date1() -> Rule {
    let (day, month, year, sp) = (day(), month(), year(), sp());
    Rule::new(
        "DATE1",
        "day SP month SP year",
        "e.g., 02 Jun 1982",
        format!(
            "{}{sp}{}{sp}{}",
            day.fragment,
            month.fragment,
            year.fragment,
            sp = sp.fragment,
        ),
    )
    .with_chars(unique_chars([day.chars, month.chars, year.chars, sp.chars]))
}

const DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const DAY_NAMES_L: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub fn day_name() -> Rule {
    Rule::new(
        "DAY-NAME",
        r#"%s"Mon" / %s"Tue" / %s"Wed" / %s"Thu" / %s"Fri" / %s"Sat" / %s"Sun""#,
        "case-sensitive day name abbreviation",
        any_of(DAY_NAMES),
    )
    .with_chars(chars_of(&DAY_NAMES.concat()))
}

pub fn day() -> Rule {
    two_digits("DAY", "day of month")
}

pub fn month() -> Rule {
    Rule::new(
        "MONTH",
        r#"%s"Jan" / %s"Feb" / %s"Mar" / %s"Apr" / %s"May" / %s"Jun" / %s"Jul" / %s"Aug" / %s"Sep" / %s"Oct" / %s"Nov" / %s"Dec""#,
        "case-sensitive month abbreviation",
        any_of(MONTHS),
    )
    .with_chars(chars_of(&MONTHS.concat()))
}

pub fn year() -> Rule {
    let digit = digit();
    Rule::new("YEAR", "4DIGIT", "four-digit year", digit.fragment + "{4}").with_chars(digit.chars)
}

pub fn time_of_day() -> Rule {
    let (hour, minute, second) = (hour(), minute(), second());
    Rule::new(
        "TIME-OF-DAY",
        r#"hour ":" minute ":" second"#,
        "00:00:00 - 23:59:60 (leap second)",
        format!("{}:{}:{}", hour.fragment, minute.fragment, second.fragment),
    )
    .with_chars(unique_chars([hour.chars, minute.chars, second.chars, chars_of(":")]))
}

pub fn hour() -> Rule {
    two_digits("HOUR", "two-digit hour")
}

pub fn minute() -> Rule {
    two_digits("MINUTE", "two-digit minute")
}

pub fn second() -> Rule {
    two_digits("SECOND", "two-digit second")
}

fn two_digits(name: &'static str, description: &'static str) -> Rule {
    let digit = digit();
    Rule::new(name, "2DIGIT", description, digit.fragment + "{2}").with_chars(digit.chars)
}

pub fn gmt() -> Rule {
    Rule::new("GMT", r#"%s"GMT""#, "case-sensitive time zone", "GMT").with_chars(chars_of("GMT"))
}

pub fn obs_date() -> Rule {
    let (rfc850_date, asctime_date) = (rfc850_date(), asctime_date());
    Rule::new(
        "OBS-DATE",
        "rfc850-date / asctime-date",
        "obsolete date formats",
        any_of([rfc850_date.fragment, asctime_date.fragment]),
    )
    .with_chars(unique_chars([rfc850_date.chars, asctime_date.chars]))
}

pub fn rfc850_date() -> Rule {
    let (day_name_l, date2, time_of_day, gmt, sp) =
        (day_name_l(), date2(), time_of_day(), gmt(), sp());
    Rule::new(
        "RFC850-DATE",
        r#"day-name-l "," SP date2 SP time-of-day SP GMT"#,
        "e.g., Sunday, 06-Nov-94 08:49:37 GMT",
        format!(
            "{},{sp}{}{sp}{}{sp}{}",
            day_name_l.fragment,
            date2.fragment,
            time_of_day.fragment,
            gmt.fragment,
            sp = sp.fragment,
        ),
    )
    .with_chars(unique_chars([
        day_name_l.chars,
        date2.chars,
        time_of_day.chars,
        gmt.chars,
        sp.chars,
        chars_of(","),
    ]))
}

pub fn day_name_l() -> Rule {
    Rule::new(
        "DAY-NAME-L",
        r#"%s"Monday" / %s"Tuesday" / %s"Wednesday" / %s"Thursday" / %s"Friday" / %s"Saturday" / %s"Sunday""#,
        "case-sensitive full day name",
        any_of(DAY_NAMES_L),
    )
    .with_chars(chars_of(&DAY_NAMES_L.concat()))
}

pub fn date2() -> Rule {
    let (day, month, digit) = (day(), month(), digit());
    Rule::new(
        "DATE2",
        r#"day "-" month "-" 2DIGIT"#,
        "e.g., 02-Jun-82",
        format!("{}-{}-{}{{2}}", day.fragment, month.fragment, digit.fragment),
    )
    .with_chars(unique_chars([day.chars, month.chars, digit.chars, chars_of("-")]))
}

pub fn asctime_date() -> Rule {
    let (day_name, date3, time_of_day, year, sp) =
        (day_name(), date3(), time_of_day(), year(), sp());
    Rule::new(
        "ASCTIME-DATE",
        "day-name SP date3 SP time-of-day SP year",
        "ANSI C asctime() format",
        format!(
            "{}{sp}{}{sp}{}{sp}{}",
            day_name.fragment,
            date3.fragment,
            time_of_day.fragment,
            year.fragment,
            sp = sp.fragment,
        ),
    )
    .with_chars(unique_chars([
        day_name.chars,
        date3.chars,
        time_of_day.chars,
        year.chars,
        sp.chars,
    ]))
}

pub fn date3() -> Rule {
    let (month, digit, sp) = (month(), digit(), sp());
    Rule::new(
        "DATE3",
        "month SP ( 2DIGIT / ( SP DIGIT ))",
        "e.g., Jun  2",
        format!(
            "{}{sp}{}",
            month.fragment,
            any_of([
                format!("{}{{2}}", digit.fragment),
                format!("{}{}", sp.fragment, digit.fragment),
            ]),
            sp = sp.fragment,
        ),
    )
    .with_chars(unique_chars([month.chars, digit.chars, sp.chars]))
}

// Entity tags (section 8.8.3)

pub fn etag() -> Rule {
    Rule {
        notation: "entity-tag",
        description: "ETag header field value",
        ..entity_tag().alias("ETAG")
    }
}

pub fn entity_tag() -> Rule {
    let (weak, opaque_tag) = (weak(), opaque_tag());
    Rule::new(
        "ENTITY-TAG",
        "[ weak ] opaque-tag",
        "optionally weak opaque validator",
        format!("(?:{})?{}", weak.fragment, opaque_tag.fragment),
    )
    .with_chars(unique_chars([weak.chars, opaque_tag.chars]))
}

pub fn weak() -> Rule {
    Rule::new("WEAK", "%s\"W/\"", "weak validator indicator", "W/").with_chars(chars_of("W/"))
}

pub fn opaque_tag() -> Rule {
    let (dquote, etagc) = (dquote(), etagc());
    Rule::new(
        "OPAQUE-TAG",
        "DQUOTE *etagc DQUOTE",
        "double-quoted validator",
        format!("{0}{1}*{0}", dquote.fragment, etagc.fragment),
    )
    .with_chars(unique_chars([dquote.chars, etagc.chars]))
}

pub fn etagc() -> Rule {
    let obs_text = obs_text();
    Rule::new(
        "ETAGC",
        "%x21 / %x23-7E / obs-text",
        "VCHAR except double quotes, plus obs-text",
        any_of([hex_char(0x21), hex_range(0x23, 0x7E), obs_text.fragment]),
    )
    .with_chars(unique_chars([chars_of("!"), char_range('#', '~'), obs_text.chars]))
}

// Fields (section 5)

pub fn field_name() -> Rule {
    Rule {
        notation: "token",
        description: "field name",
        ..token().alias("FIELD-NAME")
    }
}

pub fn field_value() -> Rule {
    let field_content = field_content();
    Rule::new(
        "FIELD-VALUE",
        "*field-content",
        "field value",
        format!("(?:{})*", field_content.fragment),
    )
    .with_chars(field_content.chars)
}

pub fn field_content() -> Rule {
    let (field_vchar, sp, htab) = (field_vchar(), sp(), htab());
    Rule::new(
        "FIELD-CONTENT",
        "field-vchar [ 1*( SP / HTAB / field-vchar ) field-vchar ]",
        "visible characters with interior whitespace",
        format!(
            "{0}(?:{1}+{0})?",
            field_vchar.fragment,
            any_of([sp.fragment, htab.fragment, field_vchar.fragment.clone()])
        ),
    )
    .with_chars(unique_chars([field_vchar.chars, sp.chars, htab.chars]))
}

pub fn field_vchar() -> Rule {
    let (vchar, obs_text) = (vchar(), obs_text());
    Rule::new(
        "FIELD-VCHAR",
        "VCHAR / obs-text",
        "visible field character",
        any_of([vchar.fragment, obs_text.fragment]),
    )
    .with_chars(unique_chars([vchar.chars, obs_text.chars]))
}

// Parameters (section 5.6.6)

pub fn parameters() -> Rule {
    let (parameter, ows) = (parameter(), ows());
    Rule::new(
        "PARAMETERS",
        r#"*( OWS ";" OWS [ parameter ] )"#,
        "semicolon-delimited name=value pairs",
        format!(
            "(?:{ows};{ows}(?:{})?)*",
            parameter.fragment,
            ows = ows.fragment,
        ),
    )
    .with_chars(unique_chars([parameter.chars, ows.chars, chars_of(";")]))
}

pub fn parameter() -> Rule {
    let (parameter_name, parameter_value) = (parameter_name(), parameter_value());
    Rule::new(
        "PARAMETER",
        r#"parameter-name "=" parameter-value"#,
        "name=value pair",
        format!("{}={}", parameter_name.fragment, parameter_value.fragment),
    )
    .with_chars(unique_chars([
        parameter_name.chars,
        parameter_value.chars,
        chars_of("="),
    ]))
}

pub fn parameter_name() -> Rule {
    Rule {
        notation: "token",
        description: "parameter name",
        ..token().alias("PARAMETER-NAME")
    }
}

pub fn parameter_value() -> Rule {
    let (token, quoted_string) = (token(), quoted_string());
    Rule::new(
        "PARAMETER-VALUE",
        "( token / quoted-string )",
        "token or quoted string",
        any_of([token.fragment, quoted_string.fragment]),
    )
    .with_chars(unique_chars([token.chars, quoted_string.chars]))
}

// URI references (section 4.1)

pub fn uri_host() -> Rule {
    Rule {
        notation: "<host, see [URI], Section 3.2.2>",
        ..rfc3986::host().alias("URI-HOST")
    }
}

pub fn absolute_path() -> Rule {
    let segment = rfc3986::segment();
    Rule::new(
        "ABSOLUTE-PATH",
        r#"1*( "/" segment )"#,
        "one or more slash-prefixed segments",
        format!("(?:/{})+", segment.fragment),
    )
    .with_chars(unique_chars([segment.chars, chars_of("/")]))
}

pub fn partial_uri() -> Rule {
    let (relative_part, query) = (rfc3986::relative_part(), rfc3986::query());
    Rule::new(
        "PARTIAL-URI",
        r#"relative-part [ "?" query ]"#,
        "relative reference without a fragment",
        format!(r"{}(?:\?{})?", relative_part.fragment, query.fragment),
    )
    .with_chars(unique_chars([relative_part.chars, query.chars, chars_of("?")]))
}

pub fn http_uri() -> Rule {
    origin_uri(
        "HTTP-URI",
        r#""http" "://" authority path-abempty [ "?" query ]"#,
        "identifier governed by an HTTP origin server",
        "http",
    )
}

pub fn https_uri() -> Rule {
    origin_uri(
        "HTTPS-URI",
        r#""https" "://" authority path-abempty [ "?" query ]"#,
        "identifier governed by a TLS-secured HTTP origin server",
        "https",
    )
}

/// The scheme matches case-insensitively.
fn origin_uri(
    name: &'static str,
    notation: &'static str,
    description: &'static str,
    scheme: &str,
) -> Rule {
    let (authority, path_abempty, query) =
        (rfc3986::authority(), rfc3986::path_abempty(), rfc3986::query());
    Rule::new(
        name,
        notation,
        description,
        format!(
            r"(?i:{scheme})://{}{}(?:\?{})?",
            authority.fragment, path_abempty.fragment, query.fragment
        ),
    )
    .with_chars(unique_chars([
        chars_of(scheme),
        chars_of(&scheme.to_ascii_uppercase()),
        authority.chars,
        path_abempty.chars,
        query.chars,
        chars_of(":/?"),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn full_match(rule: Rule) -> Regex {
        Regex::new(&format!("^(?:{})$", rule.fragment)).unwrap()
    }

    #[test]
    fn rules_without_lookaround_compile() {
        let lookaround = ["URI_REFERENCE", "ABSOLUTE_URI", "RELATIVE_PART", "PARTIAL_URI"];
        for (key, accessor) in RULES.entries() {
            let fragment = accessor().fragment;
            if lookaround.contains(key) {
                assert!(fancy_regex::Regex::new(&fragment).is_ok(), "{key}: {fragment}");
            } else {
                assert!(Regex::new(&fragment).is_ok(), "{key}: {fragment}");
            }
        }
    }

    #[test]
    fn uri_rules_are_shared_with_rfc3986() {
        assert_eq!(RULES.get("HOST").map(|host| host()), Some(rfc3986::host()));
        assert_eq!(uri_host(), rfc3986::host());
        assert_eq!(uri_host().name, "URI-HOST");
    }

    #[test]
    fn aliases_keep_fragments() {
        assert_eq!(date(), http_date());
        assert_eq!(field_name(), token());
        assert_eq!(parameter_name(), token());
        assert_eq!(etag(), entity_tag());
    }

    #[test]
    fn tokens() {
        let token = full_match(token());
        assert!(token.is_match("Content-Type"));
        assert!(token.is_match("x!#$%&'*+-.^_`|~1"));
        assert!(!token.is_match(""));
        assert!(!token.is_match("a b"));
        assert!(!token.is_match("a,b"));
        assert!(!token.is_match("a\"b"));
    }

    #[test]
    fn quoted_strings() {
        let quoted = full_match(quoted_string());
        assert!(quoted.is_match(r#""""#));
        assert!(quoted.is_match(r#""hello world""#));
        assert!(quoted.is_match(r#""say \"hi\"""#));
        assert!(!quoted.is_match(r#""unterminated"#));
        assert!(!quoted.is_match(r#""bad " quote""#));
    }

    #[test]
    fn comments_nest_one_level() {
        let comment = full_match(comment());
        assert!(comment.is_match("(compatible)"));
        assert!(comment.is_match("(Windows NT 10.0; Win64; x64)"));
        assert!(comment.is_match("(outer (inner) text)"));
        assert!(comment.is_match(r"(escaped \) paren)"));
        assert!(!comment.is_match("(unbalanced"));
        assert!(!comment.is_match("(a (b (c)))"));
    }

    #[test]
    fn http_dates() {
        let date = full_match(http_date());
        assert!(date.is_match("Sun, 06 Nov 1994 08:49:37 GMT"));
        assert!(date.is_match("Sunday, 06-Nov-94 08:49:37 GMT"));
        assert!(date.is_match("Sun Nov  6 08:49:37 1994"));
        assert!(date.is_match("Sun Nov 16 08:49:37 1994"));
        assert!(!date.is_match("sun, 06 Nov 1994 08:49:37 GMT"));
        assert!(!date.is_match("Sun, 06 Nov 1994 08:49:37 UTC"));
        assert!(!date.is_match("Sun, 6 Nov 1994 08:49:37 GMT"));
    }

    #[test]
    fn imf_fixdate_includes_month_and_year() {
        let date1 = full_match(date1());
        assert!(date1.is_match("02 Jun 1982"));
        assert!(!date1.is_match("02"));
    }

    #[test]
    fn entity_tags() {
        let etag = full_match(entity_tag());
        assert!(etag.is_match(r#""xyzzy""#));
        assert!(etag.is_match(r#"W/"xyzzy""#));
        assert!(etag.is_match(r#""""#));
        assert!(!etag.is_match(r#"w/"xyzzy""#));
        assert!(!etag.is_match("xyzzy"));
    }

    #[test]
    fn field_values() {
        let value = full_match(field_value());
        assert!(value.is_match(""));
        assert!(value.is_match("text/html; charset=utf-8"));
        assert!(!value.is_match("trailing "));
        assert!(!value.is_match("line\r\nfold"));
    }

    #[test]
    fn parameters_follow_media_types() {
        let pattern = format!("^{}{}$", token().fragment, parameters().fragment);
        let media = Regex::new(&pattern).unwrap();
        assert!(media.is_match("text"));
        assert!(media.is_match(r#"text;charset=utf-8 ; q="0.5""#));
        assert!(media.is_match("text;"));
        assert!(!media.is_match("text;=x"));
    }

    #[test]
    fn origin_uris() {
        let http = full_match(http_uri());
        assert!(http.is_match("http://www.example.com/a?b=c"));
        assert!(http.is_match("HTTP://WWW.EXAMPLE.COM:80"));
        assert!(!http.is_match("https://www.example.com/"));
        assert!(!http.is_match("http://www.example.com/#frag"));

        let https = full_match(https_uri());
        assert!(https.is_match("https://[::1]:8443/"));
    }

    #[test]
    fn absolute_path_needs_a_segment_prefix() {
        let path = full_match(absolute_path());
        assert!(path.is_match("/"));
        assert!(path.is_match("/a//b"));
        assert!(!path.is_match(""));
        assert!(!path.is_match("a/b"));
    }

    #[test]
    fn every_rule_admits_characters() {
        for (key, accessor) in RULES.entries() {
            assert!(!accessor().chars.is_empty(), "{key} admits no characters");
        }
    }

    #[test]
    fn single_character_rules_agree_with_their_chars() {
        for rule in [tchar(), obs_text(), qdtext(), ctext(), etagc(), field_vchar()] {
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
    fn tchar_combines_digit_alpha_and_punctuation() {
        let tchar = tchar().chars;
        assert!(digit().chars.is_subset(&tchar));
        assert!(alpha().chars.is_subset(&tchar));
        assert_eq!(tchar.len(), 10 + 52 + 15);
        for delimiter in "\"(),/:;<=>?@[\\]{} ".chars() {
            assert!(!tchar.contains(&delimiter), "{delimiter:?}");
        }
        assert_eq!(token().chars, tchar);
    }

    #[test]
    fn matched_text_stays_within_chars() {
        let cases = [
            (http_date(), "Sun, 06 Nov 1994 08:49:37 GMT"),
            (http_date(), "Sunday, 06-Nov-94 08:49:37 GMT"),
            (http_date(), "Sun Nov  6 08:49:37 1994"),
            (comment(), r"(Windows (NT) \x)"),
            (entity_tag(), r#"W/"xy\zzy""#),
            (parameter(), r#"q="0.5 \"a\"""#),
            (field_value(), "text/html; charset=utf-8"),
            (http_uri(), "HTTP://www.example.com:80/a?b=c"),
        ];
        for (rule, text) in cases {
            assert!(full_match(rule.clone()).is_match(text), "{}: {text}", rule.name);
            for ch in text.chars() {
                assert!(rule.admits(ch), "{} does not admit {ch:?}", rule.name);
            }
        }
    }

    #[test]
    fn character_sets_exclude_delimiters() {
        assert!(!qdtext().admits('"'));
        assert!(!qdtext().admits('\\'));
        assert!(quoted_pair().admits('\\'));
        assert!(!ctext().admits('(') && !ctext().admits(')'));
        assert!(comment().admits('('));
        assert!(!etagc().admits('"'));
        assert!(!field_vchar().admits(' '));
        assert!(field_content().admits(' '));
        assert_eq!(time_of_day().chars, chars_of("0123456789:"));
        assert_eq!(date().chars, http_date().chars);
    }

    #[test]
    fn tchar_notation_lists_every_delimiter_literal() {
        let notation = tchar().notation;
        assert!(notation.starts_with(r##""!" / "#" / "$""##));
        assert!(notation.ends_with("DIGIT / ALPHA"));
        assert_eq!(notation.matches('"').count(), 30);
    }
}
