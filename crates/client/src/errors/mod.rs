//! Error types and classification for the FMP client.
//!
//! This module provides:
//! - [`FmpError`]: The main error enum for every client operation
//! - [`ApiErrorKind`]: Classification of failures reported by the remote API
//! - [`RetryClass`]: Classification for determining retry behavior
//! - [`classify_response`]: Inspection of a response body for an error shape

mod classify;
mod retry;

pub use classify::{classify_response, ApiFailure};
pub use retry::{ReconnectPolicy, RetryClass, RetryPolicy};

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FmpError>;

/// Kind of failure reported by the remote API.
///
/// FMP signals most failures with an ordinary JSON object carrying an
/// `"Error Message"` field instead of the expected payload.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ApiErrorKind {
    /// Missing, invalid or unauthorized API key.
    Auth,
    /// The plan's request quota has been exhausted.
    RateLimit,
    /// The request itself was rejected (unknown symbol format, bad parameter).
    MalformedRequest,
    /// An error body whose meaning could not be determined.
    Unknown,
}

impl std::fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auth => write!(f, "auth"),
            Self::RateLimit => write!(f, "rate limit"),
            Self::MalformedRequest => write!(f, "malformed request"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Errors that can occur while talking to the FMP APIs.
///
/// Each variant is classified into a [`RetryClass`] via the
/// [`retry_class`](Self::retry_class) method.
#[derive(Error, Debug)]
pub enum FmpError {
    /// A transport-level failure (DNS, connection refused, reset).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("Timeout: {endpoint}")]
    Timeout {
        /// The endpoint path that timed out
        endpoint: String,
    },

    /// The response body was not valid JSON.
    #[error("Failed to decode response from {endpoint}: {source}")]
    Decode {
        /// The endpoint path that returned the body
        endpoint: String,
        /// The underlying parse error
        source: serde_json::Error,
    },

    /// The remote API answered with an error-shaped body or status.
    #[error("API error ({kind}): {message}")]
    Api {
        /// Classification of the failure
        kind: ApiErrorKind,
        /// The message reported by the server
        message: String,
    },

    /// No endpoint with this name exists in the category.
    #[error("Unknown endpoint: {category}.{name}")]
    UnknownEndpoint {
        /// Category that was searched
        category: String,
        /// Requested endpoint name
        name: String,
    },

    /// A required path or query parameter was not supplied.
    #[error("Missing parameter '{parameter}' for endpoint {endpoint}")]
    MissingParameter {
        /// Endpoint name
        endpoint: String,
        /// Parameter name
        parameter: String,
    },

    /// An argument was supplied that the endpoint does not accept.
    #[error("Unexpected parameter '{parameter}' for endpoint {endpoint}")]
    UnexpectedParameter {
        /// Endpoint name
        endpoint: String,
        /// Parameter name
        parameter: String,
    },

    /// The request URL could not be assembled.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A WebSocket transport failure.
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] Box<tokio_tungstenite::tungstenite::Error>),

    /// A stream operation was attempted without a live connection.
    #[error("Stream is not connected")]
    NotConnected,

    /// A connection state transition that the state machine does not allow.
    #[error("Invalid stream state transition: {from} -> {to}")]
    InvalidTransition {
        /// Current state
        from: String,
        /// Requested state
        to: String,
    },

    /// An outgoing frame could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tokio_tungstenite::tungstenite::Error> for FmpError {
    fn from(error: tokio_tungstenite::tungstenite::Error) -> Self {
        Self::WebSocket(Box::new(error))
    }
}

impl FmpError {
    /// Returns the retry classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use fmp_client::errors::{ApiErrorKind, FmpError, RetryClass};
    ///
    /// let error = FmpError::Api {
    ///     kind: ApiErrorKind::RateLimit,
    ///     message: "Limit Reach".to_string(),
    /// };
    /// assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    ///
    /// let error = FmpError::NotConnected;
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            // Transient errors - retry with backoff
            Self::Timeout { .. }
            | Self::Api {
                kind: ApiErrorKind::RateLimit,
                ..
            } => RetryClass::WithBackoff,

            Self::Network(e) if e.is_connect() || e.is_timeout() => RetryClass::WithBackoff,

            // Everything else is terminal for the request at hand
            Self::Network(_)
            | Self::Decode { .. }
            | Self::Api { .. }
            | Self::UnknownEndpoint { .. }
            | Self::MissingParameter { .. }
            | Self::UnexpectedParameter { .. }
            | Self::InvalidUrl(_)
            | Self::Config(_)
            | Self::WebSocket(_)
            | Self::NotConnected
            | Self::InvalidTransition { .. }
            | Self::Serialization(_) => RetryClass::Never,
        }
    }

    /// Returns the API failure kind when this error came from the remote API.
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        match self {
            Self::Api { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
