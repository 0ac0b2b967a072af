//! REST API client for the Spiral cryptocurrency exchange
//!
//! This crate provides a typed client for Spiral's REST API, covering
//! market data, account state, and order execution.
//!
//! # Features
//!
//! - **Market Data**: currencies, symbols, k-lines, order book
//! - **Account**: balances, trade history
//! - **Trading**: place, query, and cancel orders
//!
//! # Authentication
//!
//! Private endpoints require API credentials. Each authenticated request
//! carries three headers: `api-key`, `api-expires` (Unix seconds, five
//! seconds ahead), and `api-signature` (lowercase hex HMAC-SHA256 over
//! verb, canonical path, expiry, and body — see `spiral-auth`).
//!
//! # Example
//!
//! ```no_run
//! use spiral_rest::{Credentials, SpiralRestClient};
//! use spiral_types::{OrderRequest, Side};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = SpiralRestClient::new();
//!     let book = client.get_orderbook("BTCUSDT", 20).await?;
//!     println!("best bid: {:?}", book.best_bid());
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = SpiralRestClient::with_credentials(creds);
//!     let order = OrderRequest::limit("BTCUSDT", Side::Bid, 0.01, 20000.0);
//!     let placed = auth_client.place_order(&order).await?;
//!     println!("order id: {}", placed.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Timeouts
//!
//! Each call races the network request against the configured timeout
//! (default 30s). On expiry the call fails with a timeout error and the
//! in-flight request is abandoned; there are no retries.

pub mod client;
pub mod endpoints;
pub mod error;

mod transport;

// Re-export main types
pub use client::{ClientConfig, SpiralRestClient, API_BASE};
pub use error::{RestError, RestResult};
pub use spiral_auth::Credentials;

// Re-export the data model for convenience
pub use spiral_types::{
    Balance, BookLevel, Currency, KLine, Order, OrderHistoryRequest, OrderRequest, OrderStatus,
    OrderType, Orderbook, Period, PlacedOrder, Side, SymbolInfo, Trade,
};
