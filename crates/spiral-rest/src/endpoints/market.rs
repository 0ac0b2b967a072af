//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use crate::client::SpiralRestClient;
use crate::error::RestResult;
use reqwest::Method;
use spiral_types::{
    BookPayload, Currency, DataPayload, Envelope, KLine, Orderbook, Period, SymbolInfo,
};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a SpiralRestClient,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a SpiralRestClient) -> Self {
        Self { client }
    }

    /// Get all currencies supported by Spiral along with their metadata
    #[instrument(skip(self))]
    pub async fn get_currencies(&self) -> RestResult<Vec<Currency>> {
        debug!("Fetching currencies");

        let raw = self
            .client
            .execute(Method::GET, "currencies", &BTreeMap::new(), false)
            .await?;
        let response: Envelope<DataPayload<Currency>> = serde_json::from_slice(&raw)?;

        Ok(response.into_result()?.data)
    }

    /// Get the open and available trading markets along with their metadata
    #[instrument(skip(self))]
    pub async fn get_symbols(&self) -> RestResult<Vec<SymbolInfo>> {
        debug!("Fetching symbols");

        let raw = self
            .client
            .execute(Method::GET, "products", &BTreeMap::new(), false)
            .await?;
        let response: Envelope<DataPayload<SymbolInfo>> = serde_json::from_slice(&raw)?;

        Ok(response.into_result()?.data)
    }

    /// Get candle data for a trading pair
    ///
    /// # Arguments
    /// * `symbol` - Trading pair (e.g. "BTCUSDT")
    /// * `period` - Candle interval
    /// * `limit` - Maximum number of candles to return
    #[instrument(skip(self))]
    pub async fn get_klines(
        &self,
        symbol: &str,
        period: Period,
        limit: u32,
    ) -> RestResult<Vec<KLine>> {
        let params = BTreeMap::from([
            ("symbol".to_string(), symbol.to_string()),
            ("period".to_string(), period.as_str().to_string()),
            ("limit".to_string(), limit.to_string()),
        ]);

        debug!("Fetching {} klines for {}", limit, symbol);

        let raw = self
            .client
            .execute(Method::GET, "klines", &params, false)
            .await?;
        let response: Envelope<DataPayload<KLine>> = serde_json::from_slice(&raw)?;

        Ok(response.into_result()?.data)
    }

    /// Get the current order book for a trading pair
    ///
    /// The flat row list is partitioned into bid and ask sides with the best
    /// price first on each. Fails when either side of the returned book is
    /// empty.
    ///
    /// # Arguments
    /// * `symbol` - Trading pair (e.g. "BTCUSDT")
    /// * `limit` - Maximum number of levels per side
    #[instrument(skip(self))]
    pub async fn get_orderbook(&self, symbol: &str, limit: u32) -> RestResult<Orderbook> {
        let params = BTreeMap::from([
            ("symbol".to_string(), symbol.to_string()),
            ("limit".to_string(), limit.to_string()),
        ]);

        debug!("Fetching orderbook for {}", symbol);

        let raw = self
            .client
            .execute(Method::GET, "orderbook", &params, false)
            .await?;
        let response: Envelope<BookPayload> = serde_json::from_slice(&raw)?;
        let payload = response.into_result()?;

        let book_symbol = if payload.symbol.is_empty() {
            symbol.to_string()
        } else {
            payload.symbol
        };

        Ok(Orderbook::from_rows(
            book_symbol,
            payload.last_update_id,
            payload.data,
        )?)
    }
}
