//! Email shape check.
//!
//! The check is structural only: `local@domain.tld` with a two-or-more letter
//! alphabetic TLD. Values are never trimmed or lowercased; what the user typed
//! is what gets validated and echoed back.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::state::ValidationError;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[A-Za-z]{2,}$";

static EMAIL_RE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN));

/// Whether `value` has the shape of an email address.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.as_ref().is_ok_and(|re| re.is_match(value))
}

/// Validate a submitted value, reporting why it was rejected.
///
/// # Errors
///
/// [`ValidationError::Empty`] for the empty string, [`ValidationError::Malformed`]
/// for anything else that fails [`is_valid_email`].
pub fn validate(value: &str) -> Result<&str, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty);
    }
    if !is_valid_email(value) {
        return Err(ValidationError::Malformed);
    }
    Ok(value)
}
