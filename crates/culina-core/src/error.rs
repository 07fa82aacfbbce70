//! Error types for the Culina core library.

/// Errors that can occur across the Culina service.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A request field failed validation
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation, when attributable
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// An account with this email already exists
    #[error("A user with email '{email}' already exists")]
    DuplicateEmail {
        /// The normalized email that collided
        email: String,
    },

    /// Credentials did not match any active account
    #[error("Unable to authenticate with provided credentials")]
    InvalidCredentials,

    /// The request lacked a valid authentication token
    #[error("Authentication required: {message}")]
    Unauthorized {
        /// Why the request was rejected
        message: String,
    },

    /// A referenced object does not exist for the calling user
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Object kind ("recipe", "user", ...)
        kind: &'static str,
        /// Identifier that was looked up
        id: String,
    },

    /// Password hashing or hash parsing failed
    #[error("Password hash error: {message}")]
    PasswordHash {
        /// What went wrong
        message: String,
    },

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// I/O error (file operations, sockets, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

/// Convenience `Result` type alias for Culina operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error was caused by the client's request.
    ///
    /// Client errors map to 4xx HTTP responses; everything else is a
    /// server-side failure and maps to 500.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::Validation { .. }
                | Error::DuplicateEmail { .. }
                | Error::InvalidCredentials
                | Error::Unauthorized { .. }
                | Error::NotFound { .. }
        )
    }

    /// Returns the error category used in API response bodies.
    pub fn category(&self) -> &'static str {
        match self {
            Error::Validation { .. } | Error::DuplicateEmail { .. } => "validation",
            Error::InvalidCredentials | Error::Unauthorized { .. } => "authentication",
            Error::NotFound { .. } => "not_found",
            Error::PasswordHash { .. }
            | Error::Database(_)
            | Error::Migrate(_)
            | Error::Io(_)
            | Error::Serialization(_)
            | Error::Config { .. } => "internal",
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a new duplicate-email error.
    pub fn duplicate_email<S: Into<String>>(email: S) -> Self {
        Error::DuplicateEmail {
            email: email.into(),
        }
    }

    /// Creates a new unauthorized error.
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Error::Unauthorized {
            message: message.into(),
        }
    }

    /// Creates a new not-found error.
    pub fn not_found<S: Into<String>>(kind: &'static str, id: S) -> Self {
        Error::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Creates a new password hash error.
    pub fn password_hash<S: Into<String>>(message: S) -> Self {
        Error::PasswordHash {
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
