//! Recipe tag type.

use serde::{Deserialize, Serialize};

use crate::types::{TagId, UserId};

/// A label a user attaches to recipes ("Vegan", "Dessert", ...).
///
/// Tags belong to the user who created them; two users may own tags with
/// the same name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Unique identifier for this tag
    pub id: TagId,

    /// Owner of this tag
    pub user_id: UserId,

    /// Tag name
    pub name: String,
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
