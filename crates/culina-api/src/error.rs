//! Domain error to HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use culina_core::Error;

/// Result type for API handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Wrapper turning a domain error into a JSON HTTP response.
///
/// Client errors keep their message; everything else collapses into a
/// generic 500 so internals never leak into responses.
#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, message) = match &err {
            Error::Validation { field, message } => {
                let message = match field {
                    Some(field) => format!("{field}: {message}"),
                    None => message.clone(),
                };
                (StatusCode::BAD_REQUEST, message)
            }
            Error::DuplicateEmail { .. } | Error::InvalidCredentials => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Error::Unauthorized { .. } => (StatusCode::UNAUTHORIZED, err.to_string()),
            Error::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
            _ => {
                log::error!("request failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        let body = serde_json::json!({
            "error": {
                "category": err.category(),
                "message": message,
            }
        });
        (status, Json(body)).into_response()
    }
}
