//! RFC 3986 generic URI syntax (appendix A).

use phf::phf_ordered_map;

use super::rfc5234::{alpha, digit, hexdig};
use super::{RuleFn, RuleTable};
use crate::fragment::{any_of, chars_of, hex_range, unique_chars};
use crate::rule::Rule;

pub static RULES: RuleTable = phf_ordered_map! {
    "URI" => uri as RuleFn,
    "HIER_PART" => hier_part as RuleFn,
    "URI_REFERENCE" => uri_reference as RuleFn,
    "ABSOLUTE_URI" => absolute_uri as RuleFn,
    "RELATIVE_REF" => relative_ref as RuleFn,
    "RELATIVE_PART" => relative_part as RuleFn,
    "SCHEME" => scheme as RuleFn,
    "AUTHORITY" => authority as RuleFn,
    "USERINFO" => userinfo as RuleFn,
    "HOST" => host as RuleFn,
    "PORT" => port as RuleFn,
    "IP_LITERAL" => ip_literal as RuleFn,
    "IPVFUTURE" => ipvfuture as RuleFn,
    "IPV6ADDRESS" => ipv6address as RuleFn,
    "H16" => h16 as RuleFn,
    "LS32" => ls32 as RuleFn,
    "IPV4ADDRESS" => ipv4address as RuleFn,
    "DEC_OCTET" => dec_octet as RuleFn,
    "REG_NAME" => reg_name as RuleFn,
    "PATH" => path as RuleFn,
    "PATH_ABEMPTY" => path_abempty as RuleFn,
    "PATH_ABSOLUTE" => path_absolute as RuleFn,
    "PATH_NOSCHEME" => path_noscheme as RuleFn,
    "PATH_ROOTLESS" => path_rootless as RuleFn,
    "PATH_EMPTY" => path_empty as RuleFn,
    "SEGMENT" => segment as RuleFn,
    "SEGMENT_NZ" => segment_nz as RuleFn,
    "SEGMENT_NZ_NC" => segment_nz_nc as RuleFn,
    "PCHAR" => pchar as RuleFn,
    "QUERY" => query as RuleFn,
    "FRAGMENT" => fragment as RuleFn,
    "PCT_ENCODED" => pct_encoded as RuleFn,
    "UNRESERVED" => unreserved as RuleFn,
    "RESERVED" => reserved as RuleFn,
    "GEN_DELIMS" => gen_delims as RuleFn,
    "SUB_DELIMS" => sub_delims as RuleFn,
};

pub fn uri() -> Rule {
    let (scheme, hier_part, query, fragment) = (scheme(), hier_part(), query(), fragment());
    Rule::new(
        "URI",
        r##"scheme ":" hier-part [ "?" query ] [ "#" fragment ]"##,
        "absolute URI with optional fragment",
        format!(
            r"{}:{}(?:\?{})?(?:#{})?",
            scheme.fragment, hier_part.fragment, query.fragment, fragment.fragment
        ),
    )
    .with_chars(unique_chars([
        scheme.chars,
        hier_part.chars,
        query.chars,
        fragment.chars,
        chars_of(":?#"),
    ]))
}

pub fn hier_part() -> Rule {
    let (authority, path_abempty) = (authority(), path_abempty());
    let (path_absolute, path_rootless) = (path_absolute(), path_rootless());
    Rule::new(
        "HIER-PART",
        r#""//" authority path-abempty / path-absolute / path-rootless / path-empty"#,
        "authority and path, or a bare path",
        any_of([
            format!("//{}{}", authority.fragment, path_abempty.fragment),
            path_absolute.fragment,
            path_rootless.fragment,
            path_empty().fragment,
        ]),
    )
    .with_chars(unique_chars([
        authority.chars,
        path_abempty.chars,
        path_absolute.chars,
        path_rootless.chars,
        chars_of("/"),
    ]))
}

pub fn uri_reference() -> Rule {
    let (uri, relative_ref) = (uri(), relative_ref());
    Rule::new(
        "URI-REFERENCE",
        "URI / relative-ref",
        "a URI or a relative reference",
        any_of([uri.fragment, relative_ref.fragment]),
    )
    .with_chars(unique_chars([uri.chars, relative_ref.chars]))
}

pub fn absolute_uri() -> Rule {
    let (scheme, hier_part, query) = (scheme(), hier_part(), query());
    Rule::new(
        "ABSOLUTE-URI",
        r#"scheme ":" hier-part [ "?" query ]"#,
        "URI without a fragment identifier",
        format!(
            r"{}:{}(?:\?{})?",
            scheme.fragment, hier_part.fragment, query.fragment
        ),
    )
    .with_chars(unique_chars([
        scheme.chars,
        hier_part.chars,
        query.chars,
        chars_of(":?"),
    ]))
}

pub fn relative_ref() -> Rule {
    let (relative_part, query, fragment) = (relative_part(), query(), fragment());
    Rule::new(
        "RELATIVE-REF",
        r##"relative-part [ "?" query ] [ "#" fragment ]"##,
        "network-path, absolute-path or relative-path reference",
        format!(
            r"{}(?:\?{})?(?:#{})?",
            relative_part.fragment, query.fragment, fragment.fragment
        ),
    )
    .with_chars(unique_chars([
        relative_part.chars,
        query.chars,
        fragment.chars,
        chars_of("?#"),
    ]))
}

pub fn relative_part() -> Rule {
    let (authority, path_abempty) = (authority(), path_abempty());
    let (path_absolute, path_noscheme) = (path_absolute(), path_noscheme());
    Rule::new(
        "RELATIVE-PART",
        r#""//" authority path-abempty / path-absolute / path-noscheme / path-empty"#,
        "hierarchical part of a relative reference",
        any_of([
            format!("//{}{}", authority.fragment, path_abempty.fragment),
            path_absolute.fragment,
            path_noscheme.fragment,
            path_empty().fragment,
        ]),
    )
    .with_chars(unique_chars([
        authority.chars,
        path_abempty.chars,
        path_absolute.chars,
        path_noscheme.chars,
        chars_of("/"),
    ]))
}

pub fn scheme() -> Rule {
    let (alpha, digit) = (alpha(), digit());
    Rule::new(
        "SCHEME",
        r#"ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )"#,
        "letter followed by letters, digits, plus, period or hyphen",
        format!(
            "{}{}*",
            alpha.fragment,
            any_of([alpha.fragment.clone(), digit.fragment, r"[+\-.]".into()])
        ),
    )
    .with_chars(unique_chars([alpha.chars, digit.chars, chars_of("+-.")]))
}

pub fn authority() -> Rule {
    let (userinfo, host, port) = (userinfo(), host(), port());
    Rule::new(
        "AUTHORITY",
        r#"[ userinfo "@" ] host [ ":" port ]"#,
        "registered name or server address with optional user information and port",
        format!(
            "(?:{}@)?{}(?::{})?",
            userinfo.fragment, host.fragment, port.fragment
        ),
    )
    .with_chars(unique_chars([
        userinfo.chars,
        host.chars,
        port.chars,
        chars_of("@:"),
    ]))
}

pub fn userinfo() -> Rule {
    let (unreserved, pct_encoded, sub_delims) = (unreserved(), pct_encoded(), sub_delims());
    Rule::new(
        "USERINFO",
        r#"*( unreserved / pct-encoded / sub-delims / ":" )"#,
        "user name and optional scheme-specific authorization data",
        any_of([
            unreserved.fragment,
            pct_encoded.fragment,
            sub_delims.fragment,
            ":".into(),
        ]) + "*",
    )
    .with_chars(unique_chars([
        unreserved.chars,
        pct_encoded.chars,
        sub_delims.chars,
        chars_of(":"),
    ]))
}

pub fn host() -> Rule {
    let (ip_literal, ipv4address, reg_name) = (ip_literal(), ipv4address(), reg_name());
    Rule::new(
        "HOST",
        "IP-literal / IPv4address / reg-name",
        "IP literal, dotted IPv4 address or registered name",
        any_of([ip_literal.fragment, ipv4address.fragment, reg_name.fragment]),
    )
    .with_chars(unique_chars([ip_literal.chars, ipv4address.chars, reg_name.chars]))
}

pub fn port() -> Rule {
    let digit = digit();
    Rule::new("PORT", "*DIGIT", "decimal port number", digit.fragment + "*").with_chars(digit.chars)
}

pub fn ip_literal() -> Rule {
    let (ipv6address, ipvfuture) = (ipv6address(), ipvfuture());
    Rule::new(
        "IP-LITERAL",
        r#""[" ( IPv6address / IPvFuture  ) "]""#,
        "bracketed IPv6 or future-format address",
        format!(
            r"\[{}\]",
            any_of([ipv6address.fragment, ipvfuture.fragment])
        ),
    )
    .with_chars(unique_chars([ipv6address.chars, ipvfuture.chars, chars_of("[]")]))
}

pub fn ipvfuture() -> Rule {
    let (hexdig, unreserved, sub_delims) = (hexdig(), unreserved(), sub_delims());
    Rule::new(
        "IPVFUTURE",
        r#""v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )"#,
        "version-flagged address literal",
        format!(
            r"[vV]{}+\.{}+",
            hexdig.fragment,
            any_of([unreserved.fragment, sub_delims.fragment, ":".into()])
        ),
    )
    .with_chars(unique_chars([
        hexdig.chars,
        unreserved.chars,
        sub_delims.chars,
        chars_of("vV.:"),
    ]))
}

pub fn ipv6address() -> Rule {
    let h16 = h16().fragment;
    let ls32 = ls32();
    let chars = unique_chars([ls32.chars, chars_of(":")]);
    let ls32 = ls32.fragment;
    Rule::new(
        "IPV6ADDRESS",
        r#"6( h16 ":" ) ls32 / "::" 5( h16 ":" ) ls32 / [ h16 ] "::" 4( h16 ":" ) ls32 / [ *1( h16 ":" ) h16 ] "::" 3( h16 ":" ) ls32 / [ *2( h16 ":" ) h16 ] "::" 2( h16 ":" ) ls32 / [ *3( h16 ":" ) h16 ] "::" h16 ":" ls32 / [ *4( h16 ":" ) h16 ] "::" ls32 / [ *5( h16 ":" ) h16 ] "::" h16 / [ *6( h16 ":" ) h16 ] "::""#,
        "eight 16-bit hex pieces, optionally eliding zero runs or ending in IPv4",
        any_of([
            format!("(?:{h16}:){{6}}{ls32}"),
            format!("::(?:{h16}:){{5}}{ls32}"),
            format!("(?:{h16})?::(?:{h16}:){{4}}{ls32}"),
            format!("(?:(?:{h16}:){{0,1}}{h16})?::(?:{h16}:){{3}}{ls32}"),
            format!("(?:(?:{h16}:){{0,2}}{h16})?::(?:{h16}:){{2}}{ls32}"),
            format!("(?:(?:{h16}:){{0,3}}{h16})?::{h16}:{ls32}"),
            format!("(?:(?:{h16}:){{0,4}}{h16})?::{ls32}"),
            format!("(?:(?:{h16}:){{0,5}}{h16})?::{h16}"),
            format!("(?:(?:{h16}:){{0,6}}{h16})?::"),
        ]),
    )
    .with_chars(chars)
}

pub fn h16() -> Rule {
    let hexdig = hexdig();
    Rule::new(
        "H16",
        "1*4HEXDIG",
        "16 bits of address in hexadecimal",
        hexdig.fragment + "{1,4}",
    )
    .with_chars(hexdig.chars)
}

pub fn ls32() -> Rule {
    let (h16, ipv4address) = (h16(), ipv4address());
    Rule::new(
        "LS32",
        r#"( h16 ":" h16 ) / IPv4address"#,
        "least-significant 32 bits of address",
        any_of([format!("{0}:{0}", h16.fragment), ipv4address.fragment]),
    )
    .with_chars(unique_chars([h16.chars, ipv4address.chars, chars_of(":")]))
}

pub fn ipv4address() -> Rule {
    let dec_octet = dec_octet();
    let octet = &dec_octet.fragment;
    Rule::new(
        "IPV4ADDRESS",
        r#"dec-octet "." dec-octet "." dec-octet "." dec-octet"#,
        "dotted-decimal address",
        format!(r"{octet}\.{octet}\.{octet}\.{octet}"),
    )
    .with_chars(unique_chars([dec_octet.chars, chars_of(".")]))
}

/// Alternatives run longest first so leftmost-first engines take the whole
/// octet.
pub fn dec_octet() -> Rule {
    let Rule { fragment: digit, chars, .. } = digit();
    Rule::new(
        "DEC-OCTET",
        r#"DIGIT / %x31-39 DIGIT / "1" 2DIGIT / "2" %x30-34 DIGIT / "25" %x30-35"#,
        "0-9 / 10-99 / 100-199 / 200-249 / 250-255",
        any_of([
            format!("25{}", hex_range(0x30, 0x35)),
            format!("2{}{digit}", hex_range(0x30, 0x34)),
            format!("1{digit}{{2}}"),
            format!("{}{digit}", hex_range(0x31, 0x39)),
            digit.clone(),
        ]),
    )
    .with_chars(chars)
}

pub fn reg_name() -> Rule {
    let (unreserved, pct_encoded, sub_delims) = (unreserved(), pct_encoded(), sub_delims());
    Rule::new(
        "REG-NAME",
        "*( unreserved / pct-encoded / sub-delims )",
        "registered name",
        any_of([
            unreserved.fragment,
            pct_encoded.fragment,
            sub_delims.fragment,
        ]) + "*",
    )
    .with_chars(unique_chars([unreserved.chars, pct_encoded.chars, sub_delims.chars]))
}

pub fn path() -> Rule {
    let (path_abempty, path_absolute) = (path_abempty(), path_absolute());
    let (path_noscheme, path_rootless) = (path_noscheme(), path_rootless());
    Rule::new(
        "PATH",
        "path-abempty / path-absolute / path-noscheme / path-rootless / path-empty",
        "any path form",
        any_of([
            path_abempty.fragment,
            path_absolute.fragment,
            path_noscheme.fragment,
            path_rootless.fragment,
            path_empty().fragment,
        ]),
    )
    .with_chars(unique_chars([
        path_abempty.chars,
        path_absolute.chars,
        path_noscheme.chars,
        path_rootless.chars,
    ]))
}

pub fn path_abempty() -> Rule {
    let segment = segment();
    Rule::new(
        "PATH-ABEMPTY",
        r#"*( "/" segment )"#,
        "begins with \"/\" or is empty",
        format!("(?:/{})*", segment.fragment),
    )
    .with_chars(unique_chars([segment.chars, chars_of("/")]))
}

pub fn path_absolute() -> Rule {
    let (segment_nz, segment) = (segment_nz(), segment());
    Rule::new(
        "PATH-ABSOLUTE",
        r#""/" [ segment-nz *( "/" segment ) ]"#,
        "begins with \"/\" but not \"//\"",
        format!("/(?:{}(?:/{})*)?", segment_nz.fragment, segment.fragment),
    )
    .with_chars(unique_chars([segment_nz.chars, segment.chars, chars_of("/")]))
}

pub fn path_noscheme() -> Rule {
    let (segment_nz_nc, segment) = (segment_nz_nc(), segment());
    Rule::new(
        "PATH-NOSCHEME",
        r#"segment-nz-nc *( "/" segment )"#,
        "begins with a non-colon segment",
        format!("{}(?:/{})*", segment_nz_nc.fragment, segment.fragment),
    )
    .with_chars(unique_chars([segment_nz_nc.chars, segment.chars, chars_of("/")]))
}

pub fn path_rootless() -> Rule {
    let (segment_nz, segment) = (segment_nz(), segment());
    Rule::new(
        "PATH-ROOTLESS",
        r#"segment-nz *( "/" segment )"#,
        "begins with a segment",
        format!("{}(?:/{})*", segment_nz.fragment, segment.fragment),
    )
    .with_chars(unique_chars([segment_nz.chars, segment.chars, chars_of("/")]))
}

/// Matches no characters, so its set is empty. Needs a lookaround-capable
/// engine.
pub fn path_empty() -> Rule {
    Rule::new(
        "PATH-EMPTY",
        "0<pchar>",
        "zero characters",
        format!("(?!{})", pchar().fragment),
    )
}

pub fn segment() -> Rule {
    let pchar = pchar();
    Rule::new("SEGMENT", "*pchar", "zero or more pchar", pchar.fragment + "*").with_chars(pchar.chars)
}

pub fn segment_nz() -> Rule {
    let pchar = pchar();
    Rule::new("SEGMENT-NZ", "1*pchar", "non-zero-length segment", pchar.fragment + "+")
        .with_chars(pchar.chars)
}

pub fn segment_nz_nc() -> Rule {
    let (unreserved, pct_encoded, sub_delims) = (unreserved(), pct_encoded(), sub_delims());
    Rule::new(
        "SEGMENT-NZ-NC",
        r#"1*( unreserved / pct-encoded / sub-delims / "@" )"#,
        "non-zero-length segment without any colon",
        any_of([
            unreserved.fragment,
            pct_encoded.fragment,
            sub_delims.fragment,
            "@".into(),
        ]) + "+",
    )
    .with_chars(unique_chars([
        unreserved.chars,
        pct_encoded.chars,
        sub_delims.chars,
        chars_of("@"),
    ]))
}

pub fn pchar() -> Rule {
    let (unreserved, pct_encoded, sub_delims) = (unreserved(), pct_encoded(), sub_delims());
    Rule::new(
        "PCHAR",
        r#"unreserved / pct-encoded / sub-delims / ":" / "@""#,
        "path character",
        any_of([
            unreserved.fragment,
            pct_encoded.fragment,
            sub_delims.fragment,
            "[:@]".into(),
        ]),
    )
    .with_chars(unique_chars([
        unreserved.chars,
        pct_encoded.chars,
        sub_delims.chars,
        chars_of(":@"),
    ]))
}

pub fn query() -> Rule {
    let pchar = pchar();
    Rule::new(
        "QUERY",
        r#"*( pchar / "/" / "?" )"#,
        "non-hierarchical data",
        any_of([pchar.fragment, r"[/?]".into()]) + "*",
    )
    .with_chars(unique_chars([pchar.chars, chars_of("/?")]))
}

pub fn fragment() -> Rule {
    Rule {
        description: "secondary resource identifier",
        ..query().alias("FRAGMENT")
    }
}

pub fn pct_encoded() -> Rule {
    let hexdig = hexdig();
    Rule::new(
        "PCT-ENCODED",
        r#""%" HEXDIG HEXDIG"#,
        "percent-encoded octet",
        format!("%{}{{2}}", hexdig.fragment),
    )
    .with_chars(unique_chars([hexdig.chars, chars_of("%")]))
}

pub fn unreserved() -> Rule {
    let (alpha, digit) = (alpha(), digit());
    Rule::new(
        "UNRESERVED",
        r#"ALPHA / DIGIT / "-" / "." / "_" / "~""#,
        "characters without a reserved purpose",
        any_of([alpha.fragment, digit.fragment, r"[\-._~]".into()]),
    )
    .with_chars(unique_chars([alpha.chars, digit.chars, chars_of("-._~")]))
}

pub fn reserved() -> Rule {
    let (gen_delims, sub_delims) = (gen_delims(), sub_delims());
    Rule::new(
        "RESERVED",
        "gen-delims / sub-delims",
        "delimiters of the generic or scheme-specific syntax",
        any_of([gen_delims.fragment, sub_delims.fragment]),
    )
    .with_chars(unique_chars([gen_delims.chars, sub_delims.chars]))
}

pub fn gen_delims() -> Rule {
    Rule::new(
        "GEN-DELIMS",
        r##"":" / "/" / "?" / "#" / "[" / "]" / "@""##,
        "generic component delimiters",
        r"[:/?#\[\]@]",
    )
    .with_chars(chars_of(":/?#[]@"))
}

pub fn sub_delims() -> Rule {
    Rule::new(
        "SUB-DELIMS",
        r#""!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "=""#,
        "sub-component delimiters",
        "[!$&'()*+,;=]",
    )
    .with_chars(chars_of("!$&'()*+,;="))
}
