//! Message text rules and duplicate detection.
//!
//! Rules run against the trimmed text, in order, and the first failure wins:
//! empty, blank, shorter than [`MIN_LEN`], longer than [`MAX_LEN`], no ASCII
//! alphanumeric character. Lengths count `char`s, not bytes.
//!
//! The trimmed form is only used for checking. Callers store the original text.

use thiserror::Error;

/// Minimum trimmed length (inclusive).
pub const MIN_LEN: usize = 5;
/// Maximum trimmed length (inclusive).
pub const MAX_LEN: usize = 200;

/// Why a message text was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("Message must not be empty")]
    Empty,
    #[error("Message must not be empty or only whitespace")]
    Blank,
    #[error("Message must be at least 5 characters")]
    TooShort,
    #[error("Message must be less than 200 characters")]
    TooLong,
    #[error("Message must contain at least 1 alphanumeric character")]
    NoAlphanumeric,
}

impl ValidationFailure {
    /// Human-readable reason, as reported to clients.
    pub fn reason(self) -> &'static str {
        match self {
            ValidationFailure::Empty => "Message must not be empty",
            ValidationFailure::Blank => "Message must not be empty or only whitespace",
            ValidationFailure::TooShort => "Message must be at least 5 characters",
            ValidationFailure::TooLong => "Message must be less than 200 characters",
            ValidationFailure::NoAlphanumeric => {
                "Message must contain at least 1 alphanumeric character"
            }
        }
    }
}

/// Check `text` against the message rules.
pub fn validate_message(text: &str) -> Result<(), ValidationFailure> {
    if text.is_empty() {
        return Err(ValidationFailure::Empty);
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationFailure::Blank);
    }

    let len = trimmed.chars().count();
    if len < MIN_LEN {
        return Err(ValidationFailure::TooShort);
    }
    if len > MAX_LEN {
        return Err(ValidationFailure::TooLong);
    }

    if !trimmed.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationFailure::NoAlphanumeric);
    }

    Ok(())
}

/// Comparison form of a text: trimmed and lowercased.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Whether `candidate` matches any of `existing` after normalization.
pub fn is_duplicate<I, S>(candidate: &str, existing: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let needle = normalize(candidate);
    existing.into_iter().any(|t| normalize(t.as_ref()) == needle)
}
