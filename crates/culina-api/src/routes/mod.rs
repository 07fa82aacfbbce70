//! Router assembly.
//!
//! Public routes (registration, token, health) are merged with a protected
//! sub-router wrapped in the bearer-token middleware. Unknown methods on a
//! registered path get a 405 from axum's method dispatch, so an
//! unauthenticated `POST /user/me` is still a 401 while an authenticated
//! one is a 405.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use culina_auth::AuthLayer;

use crate::state::AppState;

mod health;
mod ingredients;
mod recipes;
mod tags;
mod users;

/// Build the full application router over the given state.
pub fn app(state: AppState) -> Router {
    let public = Router::new()
        .route("/health", get(health::health))
        .route("/user/create", post(users::create))
        .route("/user/token", post(users::token))
        .with_state(state.clone());

    let protected = Router::new()
        .route("/user/me", get(users::me).patch(users::update_me))
        .route("/recipe/tags", get(tags::list).post(tags::create))
        .route(
            "/recipe/ingredients",
            get(ingredients::list).post(ingredients::create),
        )
        .route("/recipe/recipes", get(recipes::list).post(recipes::create))
        .route(
            "/recipe/recipes/{id}",
            get(recipes::retrieve)
                .put(recipes::replace)
                .patch(recipes::update)
                .delete(recipes::destroy),
        )
        .layer(AuthLayer::new(Arc::new(state.tokens.clone())))
        .with_state(state);

    public.merge(protected)
}
