//! Error types for the Profile API application

use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Network or IO error
    #[error("IO error")]
    Io(#[from] std::io::Error),
}

/// Failure of a single cat fact lookup
#[derive(Debug, Error)]
pub enum FactError {
    /// The upstream call exceeded its deadline
    #[error("cat fact request timed out")]
    Timeout,

    /// The upstream answered with a non-success status
    #[error("cat fact service returned HTTP {0}")]
    UpstreamStatus(reqwest::StatusCode),

    /// Any other transport-level failure
    #[error("cat fact request failed: {0}")]
    Network(String),
}

impl FactError {
    /// Classifies a transport error. Deadline expiry becomes [`FactError::Timeout`];
    /// everything else is carried as [`FactError::Network`].
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert_eq!(app_err.to_string(), "IO error");
    }

    #[test]
    fn test_timeout_display() {
        let err = FactError::Timeout;
        assert_eq!(err.to_string(), "cat fact request timed out");
    }

    #[test]
    fn test_upstream_status_display() {
        let err = FactError::UpstreamStatus(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "cat fact service returned HTTP 500 Internal Server Error"
        );
    }

    #[test]
    fn test_network_display() {
        let err = FactError::Network("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "cat fact request failed: connection refused"
        );
    }
}
