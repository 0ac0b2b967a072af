//! K-line (candlestick) record decoding
//!
//! Spiral delivers k-lines as 9-element positional arrays, with OHLC and
//! volume as numeric strings and timestamps as numbers:
//!
//! ```json
//! [1609459200, "100.0", "110.0", "95.0", "105.0", "10.5", 1609462800, "", 42]
//! ```

use serde::de::{Deserialize, Deserializer, Error as DeError};
use serde_json::Value;

use crate::error::SpiralError;
use crate::row;

/// Number of elements in a k-line wire row
const KLINE_ARITY: usize = 9;

/// One candlestick interval
#[derive(Debug, Clone, PartialEq)]
pub struct KLine {
    /// Interval open time (Unix seconds)
    pub open_ts: i64,
    /// Open price
    pub open: f64,
    /// High price
    pub high: f64,
    /// Low price
    pub low: f64,
    /// Close price
    pub close: f64,
    /// Traded volume
    pub volume: f64,
    /// Interval close time (Unix seconds)
    pub close_ts: i64,
    /// Reserved field, carried through verbatim
    pub reserved: String,
    /// Number of trades in the interval
    pub trade_count: i64,
}

impl KLine {
    /// Decodes a single 9-element wire row.
    ///
    /// Fails if the arity is wrong, an element has the wrong JSON type, or a
    /// numeric string does not parse. No partially decoded record escapes.
    pub fn from_row(row: &[Value]) -> Result<Self, SpiralError> {
        const WHAT: &str = "k-line";
        row::check_arity(WHAT, row, KLINE_ARITY)?;

        Ok(Self {
            open_ts: row::int_at(WHAT, row, 0)?,
            open: row::float_str_at(WHAT, row, 1)?,
            high: row::float_str_at(WHAT, row, 2)?,
            low: row::float_str_at(WHAT, row, 3)?,
            close: row::float_str_at(WHAT, row, 4)?,
            volume: row::float_str_at(WHAT, row, 5)?,
            close_ts: row::int_at(WHAT, row, 6)?,
            reserved: row::str_at(WHAT, row, 7)?.to_string(),
            trade_count: row::int_at(WHAT, row, 8)?,
        })
    }
}

impl<'de> Deserialize<'de> for KLine {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<Value>::deserialize(deserializer)?;
        Self::from_row(&raw).map_err(D::Error::custom)
    }
}
