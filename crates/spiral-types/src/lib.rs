//! Shared types for the Spiral exchange REST API
//!
//! This crate provides the data model used across the Spiral client.
//! It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`Envelope`] - the outer response wrapper with the embedded error gate
//! - [`KLine`] - candlestick record decoded from a 9-element positional array
//! - [`Orderbook`], [`BookRow`], [`BookLevel`] - order book reconstruction
//! - [`Order`], [`Balance`], [`Trade`], [`Currency`], [`SymbolInfo`] - records
//! - [`Side`], [`OrderType`], [`OrderStatus`], [`Period`] - wire enums
//! - [`SpiralError`] - decode and domain invariant failures

pub mod enums;
pub mod envelope;
pub mod error;
pub mod kline;
pub mod models;
pub mod orderbook;

mod row;

// Re-export commonly used types
pub use enums::*;
pub use envelope::*;
pub use error::*;
pub use kline::*;
pub use models::*;
pub use orderbook::*;
