//! Recipe ingredient type.

use serde::{Deserialize, Serialize};

use crate::types::{IngredientId, UserId};

/// An ingredient a user attaches to recipes ("Salt", "Cucumber", ...).
///
/// Like tags, ingredients are scoped to the user who created them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique identifier for this ingredient
    pub id: IngredientId,

    /// Owner of this ingredient
    pub user_id: UserId,

    /// Ingredient name
    pub name: String,
}

impl std::fmt::Display for Ingredient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
