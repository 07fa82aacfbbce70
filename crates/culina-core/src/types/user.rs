//! User account type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// A registered account.
///
/// The email is stored normalized (trimmed and lowercased) and is unique
/// across accounts. The password hash is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for this account
    pub id: UserId,

    /// Normalized email address, used as the login identifier
    pub email: String,

    /// Display name
    pub name: String,

    /// Argon2id hash of the password, in PHC string format
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Whether this account may authenticate
    pub is_active: bool,

    /// Whether this account may use administrative tooling
    pub is_staff: bool,

    /// Whether this account bypasses permission checks
    pub is_superuser: bool,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.email)
    }
}
