//! Leading-quantity extraction from strength values.

use std::sync::LazyLock;

use regex::Regex;

static NUMERIC_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([0-9,]+)").expect("numeric prefix pattern is valid"));

/// Returns the run of digits and commas at the start of `strength`,
/// ignoring leading whitespace.
pub fn numeric_prefix(strength: &str) -> Option<&str> {
    NUMERIC_PREFIX
        .captures(strength)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Character length of the leading numeric run, the record's digit width.
pub fn digit_count(strength: &str) -> Option<usize> {
    numeric_prefix(strength).map(|prefix| prefix.chars().count())
}
