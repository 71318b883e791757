//! Codec error types.

use oraperm_core::error::{OrapermError, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    /// Malformed JSON, a missing key, or a value of the wrong type.
    #[error("invalid JSON: {0}")]
    Format(#[from] serde_json::Error),

    #[error("'{field}' must be a finite number, got {value}")]
    NonFiniteNumber { field: &'static str, value: f64 },

    /// The JSON was well formed but described a container that breaks one
    /// of its invariants.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CodecError {
    /// True for errors caused by the shape of the JSON text rather than
    /// by the values it carried.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_) | Self::NonFiniteNumber { .. })
    }
}

impl From<CodecError> for OrapermError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Validation(inner) => OrapermError::Validation(inner),
            CodecError::Format(_) | CodecError::NonFiniteNumber { .. } => {
                OrapermError::Format(err.to_string())
            }
        }
    }
}

pub type CodecResult<T> = Result<T, CodecError>;
