// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use std::time::Duration;

use serde::Deserialize;

use crate::error::FactError;

/// Upstream endpoint serving random cat facts
pub const CAT_FACT_URL: &str = "https://catfact.ninja/fact";

/// Upper bound on a single fact lookup
pub const FACT_TIMEOUT: Duration = Duration::from_secs(5);

/// Served in place of a fact when the upstream is unreachable
pub const FALLBACK_FACT: &str =
    "Cats sleep for around 13-16 hours a day (fallback fact - external API unavailable)";

/// Wire shape of the upstream response; only `fact` is consumed
#[derive(Debug, Deserialize)]
struct FactResponse {
    fact: String,
}

/// HTTP client for the cat fact service
#[derive(Debug, Clone)]
pub struct CatFactClient {
    http: reqwest::Client,
    url: String,
}

impl CatFactClient {
    /// Creates a client against the production endpoint with the standard deadline.
    #[must_use]
    pub fn new() -> Self {
        Self::with_endpoint(CAT_FACT_URL, FACT_TIMEOUT)
    }

    /// Creates a client against an arbitrary endpoint with a caller-chosen deadline.
    pub fn with_endpoint(url: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            url: url.into(),
        }
    }

    /// Fetches one random cat fact.
    ///
    /// Deadline expiry maps to [`FactError::Timeout`], a non-2xx upstream answer
    /// to [`FactError::UpstreamStatus`], and every other transport failure
    /// (connect, DNS, malformed body) to [`FactError::Network`].
    pub async fn fetch_fact(&self) -> Result<String, FactError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(FactError::from_reqwest)?;

        if !response.status().is_success() {
            return Err(FactError::UpstreamStatus(response.status()));
        }

        let body: FactResponse = response.json().await.map_err(FactError::from_reqwest)?;

        Ok(body.fact)
    }
}

impl Default for CatFactClient {
    fn default() -> Self {
        Self::new()
    }
}
