//! Precondition checks that run once, before any grammar analysis.

use thiserror::Error;

/// Input problems that make validation impossible, as opposed to a formula
/// that is merely ungrammatical.
///
/// These propagate to the caller and are never retried: the input is
/// static, so retrying cannot change the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// No input string at all.
    #[error("input formula is absent")]
    NullInput,

    /// The string is present but cannot be a formula: empty, or containing
    /// whitespace whose intent we have no way to infer.
    #[error("input formula is invalid: {reason}")]
    InvalidInput {
        /// What made the string unusable.
        reason: String,
    },
}

/// Reject absent, empty, and whitespace-bearing input; pass everything
/// else through unchanged.
///
/// Group interiors are never re-checked: they are substrings of an input
/// that already passed here.
pub fn ensure_usable(formula: Option<&str>) -> Result<&str, InputError> {
    let formula = formula.ok_or(InputError::NullInput)?;
    if formula.is_empty() {
        return Err(InputError::InvalidInput {
            reason: "empty string".to_string(),
        });
    }
    if let Some(ws) = formula.chars().find(|c| c.is_whitespace()) {
        return Err(InputError::InvalidInput {
            reason: format!("contains whitespace character {ws:?}"),
        });
    }
    Ok(formula)
}
