//! API route handlers
//!
//! Routes are organized by functionality:
//!
//! - `health`: liveness and readiness probes
//! - `search`: plain catalog search with normalized records
//! - `recommend`: the recommendation pipeline

pub mod health;
pub mod recommend;
pub mod search;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Root endpoint (GET /), no parameters.
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Bookmatch Server",
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": "v1",
        "endpoints": [
            "/api/v1/books/search",
            "/api/v1/books/recommend",
            "/health",
            "/ready"
        ]
    })))
}

/// 404 Not Found handler for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
