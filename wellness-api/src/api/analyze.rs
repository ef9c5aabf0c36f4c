//! Wellness analysis endpoint
//!
//! POST /analyze: validate the submitted health metrics, then score them.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, info};
use wellness_common::{score, validate, ValidationErrors, WellnessResult};

/// POST /analyze
///
/// Body: `{"sleep": {...}, "heartRate": {...}, "activity": {...}}`.
/// Returns `{"score": <0-100>, "insight": "..."}`.
pub async fn analyze(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<WellnessResult>, ApiError> {
    let Json(payload) = payload?;

    let snapshot = validate(&payload).map_err(|errors| {
        info!("Rejected health snapshot: {}", errors);
        ApiError::Validation(errors)
    })?;

    let result = score(&snapshot);
    debug!(score = result.score, "Scored health snapshot");

    Ok(Json(result))
}

/// One entry of a validation error response
#[derive(Debug, Serialize)]
pub struct FieldErrorDetail {
    pub field: String,
    pub constraint: &'static str,
    pub message: String,
}

/// Analysis errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body was not readable JSON (syntax error, wrong content type, too large)
    #[error("{0}")]
    InvalidBody(#[from] JsonRejection),

    /// Body was JSON but failed field-level validation
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidBody(rejection) => {
                let body = Json(json!({
                    "error": rejection.body_text(),
                }));
                (rejection.status(), body).into_response()
            }
            ApiError::Validation(errors) => {
                let details: Vec<FieldErrorDetail> = errors
                    .errors()
                    .iter()
                    .map(|e| FieldErrorDetail {
                        field: e.field.clone(),
                        constraint: e.constraint.code(),
                        message: e.constraint.to_string(),
                    })
                    .collect();

                let body = Json(json!({
                    "error": "Validation failed",
                    "details": details,
                }));

                (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
            }
        }
    }
}
