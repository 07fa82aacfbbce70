//! Request and response DTOs.
//!
//! One struct per representation. Owner fields are absent by construction,
//! so a payload cannot smuggle an owner; the authenticated caller is always
//! the owner of anything it creates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use culina_core::{Ingredient, Recipe, Tag, User};

/// Registration payload. Missing fields deserialize to empty strings and
/// fail policy checks with a field-level message.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Login email.
    #[serde(default)]
    pub email: String,
    /// Plaintext password.
    #[serde(default)]
    pub password: String,
    /// Display name; may be omitted.
    #[serde(default)]
    pub name: String,
}

/// Public user representation. Never carries password material.
#[derive(Debug, Serialize)]
pub struct UserDto {
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            email: user.email,
            name: user.name,
        }
    }
}

/// Credentials for the token endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    /// Login email.
    #[serde(default)]
    pub email: String,
    /// Plaintext password.
    #[serde(default)]
    pub password: String,
}

/// Issued bearer token.
#[derive(Debug, Serialize)]
pub struct TokenDto {
    /// Opaque token key.
    pub token: String,
}

/// Partial profile update. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateMeRequest {
    /// New display name.
    pub name: Option<String>,
    /// New plaintext password.
    pub password: Option<String>,
}

/// Payload for creating a tag or an ingredient.
#[derive(Debug, Deserialize)]
pub struct CreateNamedRequest {
    /// The (required, non-empty) name.
    #[serde(default)]
    pub name: String,
}

/// Tag representation.
#[derive(Debug, Serialize)]
pub struct TagDto {
    /// Tag id.
    pub id: Uuid,
    /// Tag name.
    pub name: String,
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.into_uuid(),
            name: tag.name,
        }
    }
}

/// Ingredient representation.
#[derive(Debug, Serialize)]
pub struct IngredientDto {
    /// Ingredient id.
    pub id: Uuid,
    /// Ingredient name.
    pub name: String,
}

impl From<Ingredient> for IngredientDto {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: ingredient.id.into_uuid(),
            name: ingredient.name,
        }
    }
}

/// Recipe list representation: attachments as id arrays.
#[derive(Debug, Serialize)]
pub struct RecipeSummaryDto {
    /// Recipe id.
    pub id: Uuid,
    /// Recipe title.
    pub title: String,
    /// Minutes to prepare.
    pub time_minutes: i64,
    /// Approximate cost.
    pub price: f64,
    /// External link; empty when unset.
    pub link: String,
    /// Attached tag ids, in attachment order.
    pub tags: Vec<Uuid>,
    /// Attached ingredient ids, in attachment order.
    pub ingredients: Vec<Uuid>,
}

impl From<Recipe> for RecipeSummaryDto {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id.into_uuid(),
            title: recipe.title,
            time_minutes: recipe.time_minutes,
            price: recipe.price,
            link: recipe.link,
            tags: recipe.tags.into_iter().map(Into::into).collect(),
            ingredients: recipe.ingredients.into_iter().map(Into::into).collect(),
        }
    }
}

/// Recipe detail representation: attachments as nested objects.
#[derive(Debug, Serialize)]
pub struct RecipeDetailDto {
    /// Recipe id.
    pub id: Uuid,
    /// Recipe title.
    pub title: String,
    /// Minutes to prepare.
    pub time_minutes: i64,
    /// Approximate cost.
    pub price: f64,
    /// External link; empty when unset.
    pub link: String,
    /// Attached tags.
    pub tags: Vec<TagDto>,
    /// Attached ingredients.
    pub ingredients: Vec<IngredientDto>,
}

impl RecipeDetailDto {
    /// Assemble from a recipe and its resolved attachments.
    pub fn new(recipe: Recipe, tags: Vec<Tag>, ingredients: Vec<Ingredient>) -> Self {
        Self {
            id: recipe.id.into_uuid(),
            title: recipe.title,
            time_minutes: recipe.time_minutes,
            price: recipe.price,
            link: recipe.link,
            tags: tags.into_iter().map(TagDto::from).collect(),
            ingredients: ingredients.into_iter().map(IngredientDto::from).collect(),
        }
    }
}

/// Full recipe payload for create and PUT.
///
/// `time_minutes` and `price` stay `Option` so a missing field produces a
/// field-level 400 instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct RecipeWriteRequest {
    /// Recipe title.
    #[serde(default)]
    pub title: String,
    /// Minutes to prepare; required.
    pub time_minutes: Option<i64>,
    /// Approximate cost; required.
    pub price: Option<f64>,
    /// External link.
    #[serde(default)]
    pub link: String,
    /// Tag ids to attach.
    #[serde(default)]
    pub tags: Vec<Uuid>,
    /// Ingredient ids to attach.
    #[serde(default)]
    pub ingredients: Vec<Uuid>,
}

/// Partial recipe payload for PATCH. Absent fields are left unchanged;
/// `"tags": []` clears the attachment set.
#[derive(Debug, Default, Deserialize)]
pub struct RecipePatchRequest {
    /// New title.
    pub title: Option<String>,
    /// New preparation time.
    pub time_minutes: Option<i64>,
    /// New price.
    pub price: Option<f64>,
    /// New link.
    pub link: Option<String>,
    /// Replacement tag set.
    pub tags: Option<Vec<Uuid>>,
    /// Replacement ingredient set.
    pub ingredients: Option<Vec<Uuid>>,
}
