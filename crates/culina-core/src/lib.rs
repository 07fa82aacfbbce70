#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Culina Core Library
//!
//! Domain types, identifiers, errors, and account policy for the Culina
//! recipe service.

pub mod error;
pub mod policy;
pub mod types;

// Re-exports for convenience
pub use error::{Error, Result};
pub use policy::{
    normalize_email, validate_name, validate_optional_name, validate_password, MAX_FIELD_LEN,
    MIN_PASSWORD_LEN,
};
pub use types::{Ingredient, IngredientId, Recipe, RecipeId, Tag, TagId, Token, User, UserId};
