//! API token type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// An opaque bearer token tied to one user.
///
/// Each user has at most one token; issuing is idempotent and returns the
/// existing key when one is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The opaque key presented in `Authorization: Bearer <key>` headers
    pub key: String,

    /// The account this token authenticates
    pub user_id: UserId,

    /// When the token was first issued
    pub created_at: DateTime<Utc>,
}
