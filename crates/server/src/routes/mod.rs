//! HTTP route handlers
//!
//! - `articles`: fetch, listings and publish
//! - `health`: liveness and Prometheus metrics

pub mod articles;
pub mod health;

use crate::error::ServerError;
use axum::http::header;
use axum::response::IntoResponse;

/// 404 handler for paths that match neither a route nor a static file.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}

/// 405 handler for `/publish` requests that are not POST.
pub async fn method_not_allowed() -> impl IntoResponse {
    ([(header::ALLOW, "POST")], ServerError::MethodNotAllowed)
}
