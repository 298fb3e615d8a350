//! Error types and handling for the weather MCP server

use thiserror::Error;

/// Main error type for weather lookups and server plumbing
#[derive(Error, Debug)]
pub enum WeatherServerError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Connection or transport failures talking to the upstream service
    #[error("Network error: {message}")]
    Network { message: String },

    /// Upstream did not answer within the configured timeout
    #[error("Upstream request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Upstream answered with a non-success HTTP status
    #[error("Upstream returned HTTP {status} {reason}")]
    UpstreamStatus { status: u16, reason: String },

    /// Upstream answered successfully but the body is not JSON
    #[error("Invalid upstream payload: {message}")]
    Decode { message: String },
}

impl WeatherServerError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new decode error
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn upstream_status(status: reqwest::StatusCode) -> Self {
        Self::UpstreamStatus {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WeatherServerError::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            WeatherServerError::Network { .. } => {
                "Unable to reach the weather service. Please check your internet connection."
                    .to_string()
            }
            WeatherServerError::Timeout { seconds } => {
                format!("The weather service did not respond within {seconds} seconds.")
            }
            WeatherServerError::UpstreamStatus { status, .. } => {
                format!("The weather service rejected the request (HTTP {status}).")
            }
            WeatherServerError::Decode { .. } => {
                "The weather service returned data that is not valid JSON.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = WeatherServerError::config("bad timeout");
        assert!(matches!(config_err, WeatherServerError::Config { .. }));

        let network_err = WeatherServerError::network("connection refused");
        assert!(matches!(network_err, WeatherServerError::Network { .. }));

        let decode_err = WeatherServerError::decode("expected value at line 1");
        assert!(matches!(decode_err, WeatherServerError::Decode { .. }));
    }

    #[test]
    fn test_upstream_status_carries_code_and_reason() {
        let err = WeatherServerError::upstream_status(reqwest::StatusCode::SERVICE_UNAVAILABLE);
        assert!(matches!(
            err,
            WeatherServerError::UpstreamStatus { status: 503, .. }
        ));
        assert_eq!(
            err.to_string(),
            "Upstream returned HTTP 503 Service Unavailable"
        );
    }

    #[test]
    fn test_user_messages() {
        let config_err = WeatherServerError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let network_err = WeatherServerError::network("test");
        assert!(network_err.user_message().contains("Unable to reach"));

        let timeout_err = WeatherServerError::Timeout { seconds: 10 };
        assert!(timeout_err.user_message().contains("10 seconds"));
    }

    #[test]
    fn test_upstream_user_message_names_status() {
        let err = WeatherServerError::upstream_status(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(
            err.user_message(),
            "The weather service rejected the request (HTTP 404)."
        );
    }
}
