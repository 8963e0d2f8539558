//! Error types for the lexoffice API client.
//!
//! Every fallible operation in this crate returns [`Result<T>`]. Request
//! failures carry enough context (status, message, request URI) to be
//! logged or reported without holding on to the response.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for lexoffice operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all lexoffice API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport failed (connect, TLS, DNS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API answered with a status other than 200/201/202/204
    #[error("API error: status={status}, message={message}, uri={uri}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable error message
        message: String,
        /// The request URI that failed
        uri: String,
        /// Raw response body for debugging
        body: Value,
    },

    /// The per-call deadline elapsed before a response arrived
    #[error("Request timeout")]
    Timeout,

    /// The access token does not match the lexoffice token format
    #[error("Access token is missing or malformed")]
    InvalidAccessToken,

    /// Too many requests are already waiting on the rate limiter
    #[error("Rate limiter queue is full")]
    RateLimitQueueFull,

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if this error is potentially transient and the
    /// operation could be retried by the caller.
    ///
    /// The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::Timeout | Error::RateLimitQueueFull => true,
            Error::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` for a 404 response.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` for a 429 response.
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }

    /// Returns `true` if this error indicates a client-side issue.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => (400..500).contains(status),
            Error::InvalidInput(_) | Error::InvalidAccessToken | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status >= 500)
    }

    /// The HTTP status code, if the error came from an API response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Create an API error from a response body.
    ///
    /// lexoffice is not consistent about where it puts the message, so a
    /// few well-known fields are tried in order.
    pub(crate) fn from_api_response(status: u16, uri: impl Into<String>, body: Value) -> Self {
        let message = ["message", "error_description", "error"]
            .iter()
            .find_map(|key| body.get(key).and_then(|m| m.as_str()))
            .unwrap_or("Unknown API error")
            .to_string();

        Error::Api {
            status,
            message,
            uri: uri.into(),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        assert!(Error::Timeout.is_retryable());
        assert!(Error::from_api_response(429, "u", Value::Null).is_retryable());
        assert!(Error::from_api_response(503, "u", Value::Null).is_retryable());
        assert!(!Error::from_api_response(400, "u", Value::Null).is_retryable());
        assert!(!Error::InvalidInput("bad".into()).is_retryable());
    }

    #[test]
    fn test_from_api_response() {
        let body = serde_json::json!({
            "timestamp": "2024-02-01T10:00:00.000+01:00",
            "status": 406,
            "error": "Not Acceptable",
            "message": "Validation failed for request."
        });

        let err = Error::from_api_response(406, "https://api.lexoffice.io/v1/invoices", body);
        match err {
            Error::Api {
                status,
                message,
                uri,
                ..
            } => {
                assert_eq!(status, 406);
                assert_eq!(message, "Validation failed for request.");
                assert_eq!(uri, "https://api.lexoffice.io/v1/invoices");
            }
            _ => panic!("Expected Api error"),
        }
    }

    #[test]
    fn test_message_falls_back_to_error_field() {
        let body = serde_json::json!({ "error": "unauthorized" });
        let err = Error::from_api_response(401, "u", body);
        assert!(err.to_string().contains("unauthorized"));
        assert!(err.is_client_error());
        assert!(!err.is_server_error());
    }

    #[test]
    fn test_status_helpers() {
        assert!(Error::from_api_response(404, "u", Value::Null).is_not_found());
        assert!(Error::from_api_response(429, "u", Value::Null).is_rate_limited());
        assert_eq!(Error::Timeout.status(), None);
    }
}
