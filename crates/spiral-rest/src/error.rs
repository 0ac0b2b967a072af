//! Error types for REST API operations

use std::time::Duration;

use spiral_types::{ExchangeFailure, SpiralError};

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The in-flight request task failed before producing a response
    #[error("transport failure: {0}")]
    Transport(String),

    /// Server answered with a status other than 200 or 401
    #[error("unexpected HTTP status {code}: {text}")]
    Status {
        /// HTTP status code
        code: u16,
        /// HTTP status text
        text: String,
    },

    /// The timeout elapsed before the network call completed
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Missing or incomplete API credentials for a private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Response JSON failed to parse (including positional-row decoding)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Decode or domain invariant failure on otherwise valid JSON
    #[error(transparent)]
    Data(#[from] SpiralError),

    /// Nonzero error code embedded in the response envelope
    #[error(transparent)]
    Exchange(#[from] ExchangeFailure),
}

impl RestError {
    /// Check if this error is the timeout race firing
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    /// Get the exchange-reported error code, if this is an exchange error
    pub fn exchange_code(&self) -> Option<i64> {
        match self {
            Self::Exchange(failure) => Some(failure.code),
            _ => None,
        }
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_code() {
        let err = RestError::Exchange(ExchangeFailure {
            code: 1002,
            message: "invalid symbol".to_string(),
        });
        assert_eq!(err.exchange_code(), Some(1002));
        assert!(err.to_string().contains("invalid symbol"));

        assert_eq!(RestError::AuthRequired.exchange_code(), None);
    }

    #[test]
    fn test_timeout_predicate() {
        assert!(RestError::Timeout(Duration::from_secs(30)).is_timeout());
        assert!(!RestError::AuthRequired.is_timeout());
    }
}
