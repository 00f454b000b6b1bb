use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::api::AppState;
use crate::api::response::{ErrorEnvelope, ProfileEnvelope};
use crate::catfact::FALLBACK_FACT;
use crate::error::FactError;

/// GET /me
///
/// Returns the profile envelope enriched with a random cat fact. A timed-out
/// lookup answers 504 and an upstream error answers 502; any other lookup
/// failure is masked with the fallback fact and a normal 200 envelope.
pub async fn profile_handler(State(state): State<Arc<AppState>>) -> Response {
    tracing::info!("Fetching cat fact from external API");

    fact_response(state.cat_facts.fetch_fact().await)
}

fn fact_response(fact: Result<String, FactError>) -> Response {
    match fact {
        Ok(fact) => {
            tracing::info!("Cat fact fetched successfully");
            (StatusCode::OK, Json(ProfileEnvelope::new(fact))).into_response()
        }
        Err(FactError::Timeout) => {
            tracing::error!("Cat fact request timed out");
            (
                StatusCode::GATEWAY_TIMEOUT,
                Json(ErrorEnvelope::new("External API request timed out")),
            )
                .into_response()
        }
        Err(FactError::UpstreamStatus(status)) => {
            tracing::error!("Cat fact service returned HTTP {}", status);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorEnvelope::new("External API returned an error")),
            )
                .into_response()
        }
        Err(FactError::Network(reason)) => {
            tracing::warn!("Cat fact request failed: {}. Serving fallback fact.", reason);
            (
                StatusCode::OK,
                Json(ProfileEnvelope::new(FALLBACK_FACT.to_string())),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn success_wraps_fact_in_profile_envelope() {
        let response = fact_response(Ok("Cats purr.".to_string()));
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["fact"], "Cats purr.");
        assert_eq!(body["user"]["email"], "jesuemen.ehimiyein@gmail.com");
        assert_eq!(body["user"]["name"], "Jesusemen Ehimiyein");
    }

    #[tokio::test]
    async fn timeout_answers_504() {
        let response = fact_response(Err(FactError::Timeout));
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);

        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "External API request timed out");
    }

    #[tokio::test]
    async fn upstream_error_answers_502() {
        let response = fact_response(Err(FactError::UpstreamStatus(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        )));
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "External API returned an error");
    }

    #[tokio::test]
    async fn network_failure_masked_with_fallback_fact() {
        let response = fact_response(Err(FactError::Network("connection refused".to_string())));
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["fact"], FALLBACK_FACT);
    }
}
