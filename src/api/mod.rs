//! HTTP API module for Profile API
//!
//! Provides REST API endpoints for the user profile and health checks.
//!
//! # Endpoints
//! - `GET /me` — user profile enriched with a random cat fact
//! - `GET /health` — health check
//! - anything else — JSON 404

pub mod handlers;
pub mod response;

use std::any::Any;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer};

use crate::api::response::ErrorEnvelope;
use crate::catfact::CatFactClient;

/// Application state shared with endpoints
pub struct AppState {
    pub cat_facts: CatFactClient,
}

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/me", get(handlers::profile_handler))
        .route("/health", get(handlers::health_check))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Logs every incoming request with its method and path
async fn log_request(req: Request, next: Next) -> Response {
    tracing::info!("{} {}", req.method(), req.uri().path());
    next.run(req).await
}

/// Converts a panic escaping a handler into the JSON 500 envelope
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorEnvelope::new("Internal server error")),
    )
        .into_response()
}
