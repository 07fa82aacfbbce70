//! Liveness endpoint.

use axum::Json;

/// `GET /health`: liveness check, no auth required.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
