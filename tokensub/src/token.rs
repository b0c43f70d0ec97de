//! Token lexical pattern
//!
//! A token is `@`, one or more of `[a-zA-Z0-9_?+]`, then `@`. Tokens are opaque keys into a
//! symbol table; there is no nesting and no escaping.

use once_cell::sync::Lazy;
use regex::Regex;

/// The character delimiting tokens. No rendering may contain it.
pub const DELIMITER: char = '@';

/// Lazy-compiled regex matching tokens anywhere in a line.
static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"@[a-zA-Z0-9_?+]+@").unwrap());

/// Same pattern, anchored, for validating table keys.
static EXACT_TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^@[a-zA-Z0-9_?+]+@$").unwrap());

/// Token-shaped substrings of `line`, non-overlapping, left to right.
pub fn find_tokens(line: &str) -> impl Iterator<Item = &str> {
    TOKEN_REGEX.find_iter(line).map(|m| m.as_str())
}

/// Whether `s` is exactly one token.
pub fn is_token(s: &str) -> bool {
    EXACT_TOKEN_REGEX.is_match(s)
}

/// Whether `s` still contains a token delimiter.
pub fn has_delimiter(s: &str) -> bool {
    s.contains(DELIMITER)
}
