// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! JSON envelopes shared by all endpoints

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Static profile data served by `GET /me`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UserProfile {
    pub email: &'static str,
    pub name: &'static str,
    pub stack: &'static str,
}

/// The profile owner
pub const OWNER: UserProfile = UserProfile {
    email: "jesuemen.ehimiyein@gmail.com",
    name: "Jesusemen Ehimiyein",
    stack: "Rust/Axum",
};

/// Success envelope for `GET /me`
#[derive(Debug, Serialize)]
pub struct ProfileEnvelope {
    pub status: &'static str,
    pub user: UserProfile,
    pub timestamp: String,
    pub fact: String,
}

impl ProfileEnvelope {
    pub fn new(fact: String) -> Self {
        Self {
            status: "success",
            user: OWNER,
            timestamp: now_iso8601(),
            fact,
        }
    }
}

/// Failure envelope shared by the error paths
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
}

impl ErrorEnvelope {
    pub fn new(message: &'static str) -> Self {
        Self {
            status: "error",
            message,
            timestamp: now_iso8601(),
        }
    }
}

/// Response body for `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthEnvelope {
    pub status: &'static str,
    pub timestamp: String,
}

impl HealthEnvelope {
    pub fn new() -> Self {
        Self {
            status: "healthy",
            timestamp: now_iso8601(),
        }
    }
}

impl Default for HealthEnvelope {
    fn default() -> Self {
        Self::new()
    }
}

/// Current UTC time as an RFC 3339 string with millisecond precision
fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_envelope_shape() {
        let envelope = ProfileEnvelope::new("Cats purr.".to_string());
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["user"]["email"], "jesuemen.ehimiyein@gmail.com");
        assert_eq!(json["user"]["name"], "Jesusemen Ehimiyein");
        assert_eq!(json["user"]["stack"], "Rust/Axum");
        assert_eq!(json["fact"], "Cats purr.");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn error_envelope_shape() {
        let envelope = ErrorEnvelope::new("Route not found");
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "Route not found");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn health_envelope_shape() {
        let envelope = HealthEnvelope::new();
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["status"], "healthy");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn timestamp_is_rfc3339_with_utc_suffix() {
        let envelope = HealthEnvelope::new();

        let parsed = chrono::DateTime::parse_from_rfc3339(&envelope.timestamp);
        assert!(parsed.is_ok(), "unparseable timestamp: {}", envelope.timestamp);
        assert!(envelope.timestamp.ends_with('Z'));
    }
}
