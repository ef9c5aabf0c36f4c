//! Liveness and health endpoints
//!
//! Neither endpoint touches the scoring core.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use super::buildinfo::get_build_info;

/// Root status payload
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Health check response: status, module name, and version
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

/// GET /
pub async fn root_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "Wellness API is running".to_string(),
    })
}

/// GET /health
///
/// Health check endpoint for monitoring.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "wellness-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build status routes (root, health, build info)
pub fn status_routes() -> Router {
    Router::new()
        .route("/", get(root_status))
        .route("/health", get(health_check))
        .route("/build_info", get(get_build_info))
}
