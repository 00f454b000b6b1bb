use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::api::response::ErrorEnvelope;

/// Catch-all for requests no registered route or method handles.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorEnvelope::new("Route not found")),
    )
}
