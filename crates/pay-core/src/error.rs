//! # Payment Error Types
//!
//! Typed error handling for the proxy.
//! All gateway operations return `Result<T, PaymentError>`.

use thiserror::Error;

/// Core error type for all payment operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data, rejected before reaching the provider
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Network failure or timeout talking to the provider
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Provider answered with a non-2xx status
    #[error("Upstream rejected request (HTTP {status}): {message}")]
    UpstreamRejected { status: u16, message: String },

    /// Provider answered 2xx but the body was not what we expected
    #[error("Malformed upstream response: {0}")]
    UpstreamMalformed(String),
}

impl PaymentError {
    /// Returns true if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, PaymentError::UpstreamUnavailable(_))
    }

    /// Returns the HTTP status code appropriate for this error.
    ///
    /// Every per-request failure surfaces as 400 to stay compatible with
    /// existing clients; only configuration problems are server errors.
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::Configuration(_) => 500,
            PaymentError::InvalidRequest(_) => 400,
            PaymentError::UpstreamUnavailable(_) => 400,
            PaymentError::UpstreamRejected { .. } => 400,
            PaymentError::UpstreamMalformed(_) => 400,
        }
    }

    /// Short, stable name of the error kind (used as a log field)
    pub fn kind(&self) -> &'static str {
        match self {
            PaymentError::Configuration(_) => "configuration",
            PaymentError::InvalidRequest(_) => "invalid_request",
            PaymentError::UpstreamUnavailable(_) => "upstream_unavailable",
            PaymentError::UpstreamRejected { .. } => "upstream_rejected",
            PaymentError::UpstreamMalformed(_) => "upstream_malformed",
        }
    }

    /// Message returned to the caller in `error.message`.
    ///
    /// For rejected requests this is the provider's own message, unprefixed.
    pub fn client_message(&self) -> String {
        match self {
            PaymentError::UpstreamRejected { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;
