//! Input validators for prompt answers.
//!
//! Each validator is a pure predicate over the raw text the user typed.
//! They never trim or normalise; a prompt loops until one returns `true`.

use regex::Regex;
use std::sync::LazyLock;


/// Optional `H:`/`HH:` prefix followed by one or two digits, nothing else.
static TIME_DURATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9][0-9]?:)?[0-9][0-9]?$").expect("Invalid time duration regex")
});

/// Validate a positive base-10 integer.
///
/// A leading `+` is accepted; zero, negative numbers and anything that does
/// not parse as an integer are rejected. There is no upper bound.
pub fn positive_integer(text: &str) -> bool {
    let digits = text.strip_prefix('+').unwrap_or(text);
    !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && digits.bytes().any(|b| b != b'0')
}

/// Validate a wall clock duration: `M`, `MM`, `H:MM` or `HH:MM`.
pub fn time_duration(text: &str) -> bool {
    TIME_DURATION_REGEX.is_match(text)
}

/// Validate a yes/no answer. Only the exact strings `y` and `n` are accepted.
pub fn yes_no(text: &str) -> bool {
    matches!(text, "y" | "n")
}
