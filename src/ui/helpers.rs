use std::error::Error;

use super::forms::FieldError;

/// Width of the rule printed under the inventory listing.
pub(crate) const RULE_WIDTH: usize = 38;

/// Extract the deepest cause behind a validation error, if it has one. Only
/// parse failures carry an underlying error worth showing.
pub(crate) fn field_error_details(err: &FieldError) -> Option<String> {
    let mut cause = err.source()?;
    while let Some(next) = cause.source() {
        cause = next;
    }
    Some(cause.to_string())
}

/// A horizontal rule of `=` characters.
pub(crate) fn rule(width: usize) -> String {
    "=".repeat(width)
}

/// Case-insensitive match of a confirmation answer after trimming.
pub(crate) fn confirms(answer: &str, expected: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(expected)
}
