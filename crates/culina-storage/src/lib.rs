//! Culina Storage Library
//!
//! SQLite persistence for the recipe service. Each store is a cheap,
//! cloneable handle over a shared connection pool:
//!
//! - [`UserStore`]: accounts, credential checks, profile updates
//! - [`TokenStore`]: opaque API tokens; implements the auth middleware's
//!   [`TokenValidator`](culina_auth::TokenValidator)
//! - [`TagStore`] and [`IngredientStore`]: owner-scoped labels
//! - [`RecipeStore`]: recipes plus their tag and ingredient attachments
//!
//! Schema migrations are embedded in the binary and run when a
//! [`Database`] is opened.

mod db;
mod ingredients;
mod recipes;
mod tags;
mod tokens;
mod users;

pub use db::Database;
pub use ingredients::IngredientStore;
pub use recipes::{RecipeInput, RecipePatch, RecipeStore};
pub use tags::TagStore;
pub use tokens::TokenStore;
pub use users::{NewUser, ProfileUpdate, UserStore};
