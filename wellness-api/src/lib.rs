//! wellness-api library - Wellness scoring HTTP service
//!
//! Exposes `POST /analyze`, which validates one day's health metrics and
//! returns a rule-based wellness score with an insight sentence. The service
//! holds no state between requests.

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method};
use axum::routing::post;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use wellness_common::config::{CorsConfig, ServerConfig};

pub mod api;
pub mod cli;

/// Build application router
///
/// Routes:
/// - `POST /analyze`: score a health snapshot
/// - `GET /`: liveness status
/// - `GET /health`: module health check
/// - `GET /build_info`: build identification
pub fn build_router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/analyze", post(api::analyze))
        .merge(api::status_routes())
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http())
}

/// CORS layer for the configured origins
///
/// `["*"]` (the default) mirrors the request origin, method and headers and
/// allows credentials, so browser clients sending cookies are accepted.
pub fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    if cors.is_permissive() {
        return CorsLayer::very_permissive();
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}
