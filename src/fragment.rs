//! Small builders for the regex text and character sets grammar tables are
//! written in.

use itertools::Itertools;

use crate::rule::CharSet;

/// Non-capturing alternation: `(?:a|b|c)`.
pub fn any_of<I>(alternatives: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    format!(
        "(?:{})",
        alternatives.into_iter().map(|alt| alt.as_ref().to_owned()).join("|")
    )
}

/// One byte as a `\xHH` escape.
pub fn hex_char(byte: u8) -> String {
    format!(r"\x{byte:02X}")
}

/// Inclusive byte range as a bracket class: `[\xLO-\xHI]`.
pub fn hex_range(lo: u8, hi: u8) -> String {
    format!(r"[\x{lo:02X}-\x{hi:02X}]")
}

/// Every character from `lo` through `hi` inclusive. Empty when `hi < lo`.
pub fn char_range(lo: char, hi: char) -> CharSet {
    (lo..=hi).collect()
}

/// The characters of `text`, deduplicated.
pub fn chars_of(text: &str) -> CharSet {
    text.chars().collect()
}

/// Union of character sets.
pub fn unique_chars<I>(sets: I) -> CharSet
where
    I: IntoIterator<Item = CharSet>,
{
    sets.into_iter().flatten().collect()
}
