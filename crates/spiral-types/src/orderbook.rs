//! Order book rows and two-sided book reconstruction
//!
//! The orderbook endpoint returns a flat list of 3-element positional rows,
//! `["price", "size", "bid"|"ask"]`, with price and size as numeric strings.
//! Rows are partitioned by side into a two-sided [`Orderbook`].

use serde::de::{Deserializer, Error as DeError};
use serde::Deserialize;
use serde_json::Value;

use crate::enums::Side;
use crate::error::SpiralError;
use crate::row;

/// Number of elements in an order-book wire row
const BOOK_ROW_ARITY: usize = 3;

/// One flat order-book row as delivered on the wire
#[derive(Debug, Clone, PartialEq)]
pub struct BookRow {
    /// Price level
    pub price: f64,
    /// Size available at this price
    pub size: f64,
    /// Which side of the book the level belongs to
    pub side: Side,
}

impl BookRow {
    /// Decodes a single 3-element wire row.
    pub fn from_row(row: &[Value]) -> Result<Self, SpiralError> {
        const WHAT: &str = "order book";
        row::check_arity(WHAT, row, BOOK_ROW_ARITY)?;

        Ok(Self {
            price: row::float_str_at(WHAT, row, 0)?,
            size: row::float_str_at(WHAT, row, 1)?,
            side: row::str_at(WHAT, row, 2)?.parse()?,
        })
    }
}

impl<'de> Deserialize<'de> for BookRow {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<Value>::deserialize(deserializer)?;
        Self::from_row(&raw).map_err(D::Error::custom)
    }
}

/// A single price level on one side of the book
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookLevel {
    /// Price of this level
    pub price: f64,
    /// Quantity at this price level
    pub size: f64,
}

/// Payload of the orderbook endpoint, flattened into the response envelope
#[derive(Debug, Deserialize)]
pub struct BookPayload {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub last_update_id: i64,
    #[serde(default)]
    pub data: Vec<BookRow>,
}

/// A reconstructed two-sided order book
///
/// `bids[0]` is the best (highest) bid and `asks[0]` the best (lowest) ask.
#[derive(Debug, Clone, PartialEq)]
pub struct Orderbook {
    /// Trading pair the book belongs to
    pub symbol: String,
    /// Exchange-side sequence number of this snapshot
    pub last_update_id: i64,
    /// Buy levels, best first
    pub bids: Vec<BookLevel>,
    /// Sell levels, best first
    pub asks: Vec<BookLevel>,
}

impl Orderbook {
    /// Builds a two-sided book from the flat row list.
    ///
    /// Precondition: the feed delivers bid rows in ascending price order.
    /// The bid side is reversed, not sorted, to put the best bid at index 0;
    /// if the feed ever changes its ordering this produces a misordered book.
    ///
    /// Fails with [`SpiralError::OneSidedBook`] when either side comes out
    /// empty after partitioning.
    pub fn from_rows(
        symbol: impl Into<String>,
        last_update_id: i64,
        rows: Vec<BookRow>,
    ) -> Result<Self, SpiralError> {
        let symbol = symbol.into();
        let mut bids = Vec::new();
        let mut asks = Vec::new();

        for row in rows {
            let level = BookLevel {
                price: row.price,
                size: row.size,
            };
            match row.side {
                Side::Bid => bids.push(level),
                Side::Ask => asks.push(level),
            }
        }
        bids.reverse();

        if bids.is_empty() || asks.is_empty() {
            return Err(SpiralError::OneSidedBook { symbol });
        }

        Ok(Self {
            symbol,
            last_update_id,
            bids,
            asks,
        })
    }

    /// Get the best (highest) bid
    pub fn best_bid(&self) -> Option<&BookLevel> {
        self.bids.first()
    }

    /// Get the best (lowest) ask
    pub fn best_ask(&self) -> Option<&BookLevel> {
        self.asks.first()
    }

    /// Get the bid/ask spread
    pub fn spread(&self) -> Option<f64> {
        Some(self.best_ask()?.price - self.best_bid()?.price)
    }
}
