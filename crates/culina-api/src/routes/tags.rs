//! Tag endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};

use culina_auth::AuthenticatedUser;

use crate::dto::{CreateNamedRequest, TagDto};
use crate::error::ApiResult;
use crate::state::AppState;

/// `GET /recipe/tags`: the caller's tags, ordered by name descending.
pub async fn list(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<TagDto>>> {
    let tags = state.tags.list(identity.id).await?;
    Ok(Json(tags.into_iter().map(TagDto::from).collect()))
}

/// `POST /recipe/tags`: create a tag owned by the caller.
pub async fn create(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Json(req): Json<CreateNamedRequest>,
) -> ApiResult<(StatusCode, Json<TagDto>)> {
    let tag = state.tags.create(identity.id, &req.name).await?;
    Ok((StatusCode::CREATED, Json(tag.into())))
}
