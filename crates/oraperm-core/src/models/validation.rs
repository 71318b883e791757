//! Validation result domain model.

/// Outcome of a server-side business-rule check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Reason the check failed. Empty when `is_valid` is true.
    pub validation_error: String,
}

impl ValidationResult {
    pub fn new(is_valid: bool, validation_error: impl Into<String>) -> Self {
        Self {
            is_valid,
            validation_error: validation_error.into(),
        }
    }

    pub fn valid() -> Self {
        Self::new(true, String::new())
    }

    pub fn invalid(validation_error: impl Into<String>) -> Self {
        Self::new(false, validation_error)
    }
}
