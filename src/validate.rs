//! Prompt validation.
//!
//! Runs before the engines are invoked; the engines themselves accept
//! arbitrary text and never re-validate.

use thiserror::Error;

/// Maximum accepted prompt length in characters (untrimmed).
pub const MAX_PROMPT_CHARS: usize = 10_000;

/// Minimum accepted prompt length in characters after trimming.
pub const MIN_PROMPT_CHARS: usize = 3;

/// Literal inputs that are almost certainly tests, not real prompts.
const PLACEHOLDER_INPUTS: &[&str] = &["test", "hello", "hi", "123"];

/// Why a prompt was rejected before analysis.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("prompt cannot be empty")]
    Empty,
    #[error("prompt is too short (minimum {MIN_PROMPT_CHARS} characters)")]
    TooShort,
    #[error("prompt is too long (maximum {MAX_PROMPT_CHARS} characters)")]
    TooLong,
    #[error("prompt appears to be a test input rather than a real prompt")]
    Placeholder,
}

/// Validate a prompt before analysis.
pub fn validate_prompt(prompt: &str) -> Result<(), ValidationError> {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    if trimmed.chars().count() < MIN_PROMPT_CHARS {
        return Err(ValidationError::TooShort);
    }
    if prompt.chars().count() > MAX_PROMPT_CHARS {
        return Err(ValidationError::TooLong);
    }
    if PLACEHOLDER_INPUTS
        .iter()
        .any(|p| trimmed.eq_ignore_ascii_case(p))
    {
        return Err(ValidationError::Placeholder);
    }
    Ok(())
}
