//! Ingredient endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};

use culina_auth::AuthenticatedUser;

use crate::dto::{CreateNamedRequest, IngredientDto};
use crate::error::ApiResult;
use crate::state::AppState;

/// `GET /recipe/ingredients`: the caller's ingredients, ordered by name
/// descending.
pub async fn list(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<IngredientDto>>> {
    let ingredients = state.ingredients.list(identity.id).await?;
    Ok(Json(
        ingredients.into_iter().map(IngredientDto::from).collect(),
    ))
}

/// `POST /recipe/ingredients`: create an ingredient owned by the caller.
pub async fn create(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Json(req): Json<CreateNamedRequest>,
) -> ApiResult<(StatusCode, Json<IngredientDto>)> {
    let ingredient = state.ingredients.create(identity.id, &req.name).await?;
    Ok((StatusCode::CREATED, Json(ingredient.into())))
}
