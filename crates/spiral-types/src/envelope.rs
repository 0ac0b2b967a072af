//! Response envelope with the embedded error gate
//!
//! Every Spiral response carries a numeric error code and message next to
//! its payload. Code `0` means success; any other code means the payload
//! must be discarded and the message surfaced as the failure reason. The
//! envelope is decoded first and only then split into payload or failure,
//! so a success-shaped struct is never handed out half-populated.

use serde::Deserialize;
use thiserror::Error;

/// Error reported inside an otherwise well-formed response
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("exchange reported error {code}: {message}")]
pub struct ExchangeFailure {
    /// Nonzero Spiral error code
    pub code: i64,
    /// Message text supplied by the exchange
    pub message: String,
}

/// Outer wrapper around every Spiral response
///
/// The payload type is flattened next to the error fields; its fields all
/// default so an error envelope without payload keys still parses.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    /// Error code, `0` on success
    #[serde(default)]
    pub code: i64,
    /// Error message, empty on success
    #[serde(default)]
    pub msg: String,
    /// Endpoint-specific payload
    #[serde(flatten)]
    pub payload: T,
}

impl<T> Envelope<T> {
    /// Check whether the envelope indicates success
    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /// Split the envelope into its payload or the embedded failure
    pub fn into_result(self) -> Result<T, ExchangeFailure> {
        if self.code == 0 {
            Ok(self.payload)
        } else {
            Err(ExchangeFailure {
                code: self.code,
                message: self.msg,
            })
        }
    }
}

/// Payload for the endpoints that return records under a `data` key
#[derive(Debug, Deserialize)]
pub struct DataPayload<T> {
    // Path form so the derive puts no `Default` bound on `T`
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Payload for acknowledgement-only endpoints (cancellations)
#[derive(Debug, Deserialize)]
pub struct Ack {}
