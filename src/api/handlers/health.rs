use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::api::response::HealthEnvelope;

/// GET /health
///
/// Simple health check endpoint for monitoring service status.
/// Returns "healthy" status and the current timestamp.
pub async fn health_check() -> impl IntoResponse {
    let response = HealthEnvelope::new();

    (StatusCode::OK, Json(response))
}
