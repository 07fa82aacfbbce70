//! Core domain types for the recipe service.

mod ids;
mod ingredient;
mod proptests;
mod recipe;
mod tag;
mod token;
mod user;

pub use ids::{IngredientId, RecipeId, TagId, UserId};
pub use ingredient::Ingredient;
pub use recipe::Recipe;
pub use tag::Tag;
pub use token::Token;
pub use user::User;
