//! # culina-api
//!
//! HTTP API for the Culina recipe service.
//!
//! This crate provides the REST surface:
//! - Registration, token, and profile endpoints under `/user`
//! - Owner-scoped tag, ingredient, and recipe endpoints under `/recipe`
//! - Bearer-token middleware wiring and error-to-status mapping
//! - Request/response DTOs (summary and detail representations)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::app;
pub use state::AppState;
