//! Error types for decoding and domain invariants

use thiserror::Error;

/// Errors produced while decoding Spiral payloads or checking domain
/// invariants on the decoded data.
///
/// Decode variants cover the positional-array wire formats (k-line and
/// order-book rows); domain variants cover conditions such as a one-sided
/// order book or an empty balance lookup.
#[derive(Error, Debug)]
pub enum SpiralError {
    // === Decode errors ===
    /// Positional row has the wrong number of elements
    #[error("{what} row must have {expected} elements, got {actual}")]
    RowArity {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Positional row element has the wrong JSON type
    #[error("{what} row element {index} is not {expected}")]
    RowType {
        what: &'static str,
        index: usize,
        expected: &'static str,
    },

    /// Numeric string failed to parse
    #[error("{what} row element {index}: {value:?} is not a number")]
    NumericString {
        what: &'static str,
        index: usize,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Side tag was neither `bid` nor `ask`
    #[error("unknown order book side {0:?}")]
    UnknownSide(String),

    // === Domain invariant violations ===
    /// Order book aggregation left one side empty
    #[error("order book for {symbol} is missing bids or asks")]
    OneSidedBook { symbol: String },

    /// Balance lookup returned no entry for the requested currency
    #[error("no balance returned for currency {0}")]
    BalanceNotFound(String),

    /// Successful envelope arrived without the expected payload
    #[error("response is missing the {0} payload")]
    MissingPayload(&'static str),
}
