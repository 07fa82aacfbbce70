//! Shared application state.

use culina_storage::{Database, IngredientStore, RecipeStore, TagStore, TokenStore, UserStore};

/// Store handles shared by every handler.
///
/// Cloning is cheap; all handles sit on the same connection pool.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Account store.
    pub users: UserStore,
    /// API token store; doubles as the middleware's token validator.
    pub tokens: TokenStore,
    /// Tag store.
    pub tags: TagStore,
    /// Ingredient store.
    pub ingredients: IngredientStore,
    /// Recipe store.
    pub recipes: RecipeStore,
}

impl AppState {
    /// Build the full set of store handles over one database.
    pub fn new(db: &Database) -> Self {
        Self {
            users: UserStore::new(db),
            tokens: TokenStore::new(db),
            tags: TagStore::new(db),
            ingredients: IngredientStore::new(db),
            recipes: RecipeStore::new(db),
        }
    }
}
