//! Word/digit/punctuation splitter for classifier input

use std::sync::LazyLock;

use regex::Regex;

/// Runs of letters, runs of digits, or a single non-word non-space character
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+|[0-9]+|[^\sA-Za-z0-9]").unwrap());

/// Split a line into word, number, and punctuation tokens
/// Whitespace separates tokens and is never emitted as one
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
