//! Country name normalization
//!
//! Turns any string into a comparison key: decomposed, lower-case, letters
//! and single spaces only. An empty key never matches anything.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Parenthetical annotations, non-greedy so "A (x) B (y)" keeps "B"
pub(crate) static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*?\)").expect("static regex is valid"));

/// Canonicalize `value` into a normalized key.
///
/// Parentheticals and the connectors `&`, `+`, `/` become word breaks.
/// Every other non-letter (combining marks, periods, apostrophes, hyphens,
/// digits) is dropped, so "U.S.A." and "usa" share a key.
#[must_use]
pub fn normalize(value: &str) -> String {
    let decomposed: String = value.nfd().collect();
    let without_parens = PARENTHETICAL.replace_all(&decomposed, " ");

    let mut cleaned = String::with_capacity(without_parens.len());
    for c in without_parens.chars() {
        if matches!(c, '&' | '+' | '/') || c.is_whitespace() {
            cleaned.push(' ');
        } else if c.is_alphabetic() {
            cleaned.extend(c.to_lowercase());
        }
    }

    // to_lowercase may emit combining marks (e.g. for 'İ'); drop them too
    cleaned
        .split_whitespace()
        .map(|word| word.chars().filter(|c| c.is_alphabetic()).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
