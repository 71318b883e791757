//! Error types for the ORAPERM system.

use thiserror::Error;

/// Raised when a container object is constructed with values that break
/// one of its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Argument '{field}' must be between {min} and {max} characters in length.")]
    FieldLength {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },
}

#[derive(Debug, Error)]
pub enum OrapermError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type OrapermResult<T> = Result<T, OrapermError>;
