//! Account and token endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};

use culina_auth::AuthenticatedUser;
use culina_core::Error;
use culina_storage::{NewUser, ProfileUpdate};

use crate::dto::{CreateUserRequest, TokenDto, TokenRequest, UpdateMeRequest, UserDto};
use crate::error::ApiResult;
use crate::state::AppState;

/// `POST /user/create`: register a new account.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserDto>)> {
    let user = state
        .users
        .create_user(NewUser {
            email: req.email,
            name: req.name,
            password: req.password,
        })
        .await?;
    log::info!("registered user {}", user.id);
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// `POST /user/token`: exchange credentials for the user's API token.
///
/// Every credential failure yields the same generic 400.
pub async fn token(
    State(state): State<AppState>,
    Json(req): Json<TokenRequest>,
) -> ApiResult<Json<TokenDto>> {
    let user = state
        .users
        .verify_credentials(&req.email, &req.password)
        .await?;
    let token = state.tokens.issue(user.id).await?;
    Ok(Json(TokenDto { token: token.key }))
}

/// `GET /user/me`: the authenticated user's profile.
pub async fn me(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
) -> ApiResult<Json<UserDto>> {
    let user = state
        .users
        .get(identity.id)
        .await?
        .ok_or_else(|| Error::unauthorized("account no longer exists"))?;
    Ok(Json(user.into()))
}

/// `PATCH /user/me`: partial profile update for the authenticated user.
pub async fn update_me(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Json(req): Json<UpdateMeRequest>,
) -> ApiResult<Json<UserDto>> {
    let user = state
        .users
        .update_profile(
            identity.id,
            ProfileUpdate {
                name: req.name,
                password: req.password,
            },
        )
        .await?;
    Ok(Json(user.into()))
}
