//! Recipe endpoints.
//!
//! Lists use the summary representation (id arrays); retrieve returns the
//! detail representation with nested tag and ingredient objects. Every
//! by-id operation is filtered by the caller, so a foreign recipe is
//! indistinguishable from a missing one.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use uuid::Uuid;

use culina_auth::AuthenticatedUser;
use culina_core::{Error, IngredientId, RecipeId, TagId};
use culina_storage::{RecipeInput, RecipePatch};

use crate::dto::{RecipeDetailDto, RecipePatchRequest, RecipeSummaryDto, RecipeWriteRequest};
use crate::error::ApiResult;
use crate::state::AppState;

/// `GET /recipe/recipes`: the caller's recipes.
pub async fn list(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<RecipeSummaryDto>>> {
    let recipes = state.recipes.list(identity.id).await?;
    Ok(Json(
        recipes.into_iter().map(RecipeSummaryDto::from).collect(),
    ))
}

/// `POST /recipe/recipes`: create a recipe owned by the caller.
pub async fn create(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Json(req): Json<RecipeWriteRequest>,
) -> ApiResult<(StatusCode, Json<RecipeSummaryDto>)> {
    let input = to_input(req)?;
    let recipe = state.recipes.create(identity.id, input).await?;
    Ok((StatusCode::CREATED, Json(recipe.into())))
}

/// `GET /recipe/recipes/{id}`: detail representation of one recipe.
pub async fn retrieve(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<RecipeDetailDto>> {
    let id = RecipeId::from_uuid(id);
    let recipe = state.recipes.get(id, identity.id).await?;
    let tags = state.recipes.tags_for(id).await?;
    let ingredients = state.recipes.ingredients_for(id).await?;
    Ok(Json(RecipeDetailDto::new(recipe, tags, ingredients)))
}

/// `PUT /recipe/recipes/{id}`: replace every writable field.
pub async fn replace(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<RecipeWriteRequest>,
) -> ApiResult<Json<RecipeSummaryDto>> {
    let input = to_input(req)?;
    let recipe = state
        .recipes
        .replace(RecipeId::from_uuid(id), identity.id, input)
        .await?;
    Ok(Json(recipe.into()))
}

/// `PATCH /recipe/recipes/{id}`: merge the present fields.
pub async fn update(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<RecipePatchRequest>,
) -> ApiResult<Json<RecipeSummaryDto>> {
    let patch = RecipePatch {
        title: req.title,
        time_minutes: req.time_minutes,
        price: req.price,
        link: req.link,
        tags: req
            .tags
            .map(|ids| ids.into_iter().map(TagId::from_uuid).collect()),
        ingredients: req
            .ingredients
            .map(|ids| ids.into_iter().map(IngredientId::from_uuid).collect()),
    };
    let recipe = state
        .recipes
        .update(RecipeId::from_uuid(id), identity.id, patch)
        .await?;
    Ok(Json(recipe.into()))
}

/// `DELETE /recipe/recipes/{id}`: remove the caller's recipe.
pub async fn destroy(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state
        .recipes
        .delete(RecipeId::from_uuid(id), identity.id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

fn to_input(req: RecipeWriteRequest) -> Result<RecipeInput, Error> {
    let time_minutes = req
        .time_minutes
        .ok_or_else(|| Error::validation_field("time_minutes", "this field is required"))?;
    let price = req
        .price
        .ok_or_else(|| Error::validation_field("price", "this field is required"))?;
    Ok(RecipeInput {
        title: req.title,
        time_minutes,
        price,
        link: req.link,
        tags: req.tags.into_iter().map(TagId::from_uuid).collect(),
        ingredients: req
            .ingredients
            .into_iter()
            .map(IngredientId::from_uuid)
            .collect(),
    })
}
