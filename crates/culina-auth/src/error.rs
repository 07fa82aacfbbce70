//! Auth-specific error types.

/// Errors that can occur during authentication.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No Authorization header or bearer token present.
    #[error("missing authentication token")]
    MissingToken,

    /// Token does not match any issued key.
    #[error("invalid authentication token")]
    InvalidToken,

    /// Token is valid but the account is deactivated.
    #[error("user account is inactive")]
    InactiveUser,

    /// The token store failed while looking up the key.
    #[error("token store error: {0}")]
    Store(String),
}

impl AuthError {
    /// Create a store error from any displayable cause.
    pub fn store<S: Into<String>>(message: S) -> Self {
        AuthError::Store(message.into())
    }

    /// Whether this error should result in a 401 (vs. a 500).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AuthError::MissingToken | AuthError::InvalidToken | AuthError::InactiveUser
        )
    }
}
