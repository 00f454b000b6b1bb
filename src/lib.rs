// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Profile API
//!
//! Minimal HTTP service exposing a static user profile enriched with a random
//! cat fact fetched from the public `catfact.ninja` API.
//!
//! ## Main modules
//! - `api`: HTTP router, handlers and response envelopes
//! - `catfact`: outbound cat fact client
//! - `config`: configuration management
//! - `error`: error types
//! - `prelude`: commonly used types and traits

mod api;
mod catfact;
mod config;
mod error;
pub mod prelude;

// Re-export commonly used types
/// Application configuration
pub use config::Config;

/// Application error and result types
pub use error::{AppError, FactError, Result};

/// HTTP API router and state
pub use api::{AppState, create_router};

/// Response envelopes (public for tests)
pub use api::response::{ErrorEnvelope, HealthEnvelope, OWNER, ProfileEnvelope, UserProfile};

/// Cat fact client and upstream constants
pub use catfact::{CAT_FACT_URL, CatFactClient, FACT_TIMEOUT, FALLBACK_FACT};
