//! Authentication context domain model.

/// Identifies the user on whose behalf a request is made.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthenticationContext {
    /// Uniquely identifies a user (typically an e-mail address).
    pub user_identifier: String,
}

impl AuthenticationContext {
    pub fn new(user_identifier: impl Into<String>) -> Self {
        Self {
            user_identifier: user_identifier.into(),
        }
    }
}
