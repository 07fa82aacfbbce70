//! Authentication primitives for Culina.
//!
//! Provides:
//! - [`AuthenticatedUser`] — Identity extracted from a validated token
//! - [`TokenValidator`] — Trait for async token validation (implement per token store)
//! - [`AuthLayer`] / [`AuthService`] — Tower middleware parameterised over `TokenValidator`
//! - [`AuthError`] — Auth-specific error types
//! - [`password`] — Argon2id password hashing and verification
//! - [`token`] — Opaque token key generation

mod error;
mod middleware;
pub mod password;
pub mod token;
mod user;

pub use error::AuthError;
pub use middleware::{AuthLayer, AuthService};
pub use user::{email_from_parts, user_from_parts, AuthenticatedUser};

/// Trait for validating bearer tokens and extracting user identity.
///
/// Implement this for whatever backs the token lookup (the database store
/// in production, fixed fakes in tests). The middleware calls `validate()`
/// with the bearer token and returns the authenticated user on success.
pub trait TokenValidator: Send + Sync + 'static {
    /// Validate a token and return the authenticated user.
    fn validate(
        &self,
        token: &str,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<AuthenticatedUser, AuthError>> + Send + '_>,
    >;
}
