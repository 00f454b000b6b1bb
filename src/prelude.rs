// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for convenient use.
//! Users of the library can import everything they need with:
//!
//! ```rust
//! use profile_api::prelude::*;
//! ```

// Core types
pub use crate::config::Config;
pub use crate::error::{AppError, FactError, Result};

// HTTP API
pub use crate::api::{AppState, create_router};
pub use crate::api::response::{
    ErrorEnvelope, HealthEnvelope, OWNER, ProfileEnvelope, UserProfile,
};

// Cat fact client
pub use crate::catfact::{CAT_FACT_URL, CatFactClient, FACT_TIMEOUT, FALLBACK_FACT};
