//! Recipe type.

use serde::{Deserialize, Serialize};

use crate::types::{IngredientId, RecipeId, TagId, UserId};

/// A recipe owned by a single user.
///
/// Tag and ingredient references are held as identifier lists; callers
/// resolve them to full objects when a detail view needs them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier for this recipe
    pub id: RecipeId,

    /// Owner of this recipe
    pub user_id: UserId,

    /// Recipe title
    pub title: String,

    /// Preparation time in minutes
    pub time_minutes: i64,

    /// Approximate price
    pub price: f64,

    /// Optional external link; empty string when unset
    pub link: String,

    /// Tags attached to this recipe, in attachment order
    pub tags: Vec<TagId>,

    /// Ingredients attached to this recipe, in attachment order
    pub ingredients: Vec<IngredientId>,
}

impl std::fmt::Display for Recipe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}
