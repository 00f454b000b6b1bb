// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the Profile API application
//!
//! Loads and parses configuration from environment variables.


/// Default configuration values
pub mod defaults {
    pub const PORT: u16 = 3000;
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const PORT: &str = "PORT";
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: defaults::PORT,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let port = match std::env::var(env_vars::PORT) {
            Ok(raw) => parse_port(&raw),
            Err(_) => defaults::PORT,
        };

        Config { port }
    }
}

fn parse_port(raw: &str) -> u16 {
    raw.parse().unwrap_or_else(|_| {
        tracing::warn!(
            "Failed to parse PORT value '{}'. Using default {}.",
            raw,
            defaults::PORT
        );
        defaults::PORT
    })
}
