//! Cat fact client module
//!
//! This module provides functionality to fetch a random cat fact from the
//! public `catfact.ninja` API with a bounded wait and a fallback value.

mod client;

// Re-export public types and functions
pub use client::{CAT_FACT_URL, CatFactClient, FACT_TIMEOUT, FALLBACK_FACT};
