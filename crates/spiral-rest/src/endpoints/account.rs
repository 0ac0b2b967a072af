//! Private wallet and trade-history endpoints
//!
//! These endpoints require authentication.

use crate::client::SpiralRestClient;
use crate::error::RestResult;
use reqwest::Method;
use spiral_types::{Balance, DataPayload, Envelope, SpiralError, Trade, TradesPayload};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Trade-history page size used when the caller passes 0
const DEFAULT_TRADE_COUNT: u32 = 1000;

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    client: &'a SpiralRestClient,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(client: &'a SpiralRestClient) -> Self {
        Self { client }
    }

    /// Get all balances of the account wallet
    #[instrument(skip(self))]
    pub async fn get_balances(&self) -> RestResult<Vec<Balance>> {
        debug!("Fetching wallet balances");

        let raw = self
            .client
            .execute(Method::GET, "wallet/balances", &BTreeMap::new(), true)
            .await?;
        let response: Envelope<DataPayload<Balance>> = serde_json::from_slice(&raw)?;

        Ok(response.into_result()?.data)
    }

    /// Get the balance of a single currency
    ///
    /// Reuses the list endpoint with a `currency` filter and returns the
    /// first entry. An empty result means the currency is unknown to the
    /// wallet and fails with [`SpiralError::BalanceNotFound`] rather than
    /// fabricating a zero-valued record.
    ///
    /// # Arguments
    /// * `currency` - Currency code (e.g. "LTC")
    #[instrument(skip(self))]
    pub async fn get_balance(&self, currency: &str) -> RestResult<Balance> {
        let params = BTreeMap::from([("currency".to_string(), currency.to_string())]);

        debug!("Fetching balance for {}", currency);

        let raw = self
            .client
            .execute(Method::GET, "wallet/balances", &params, true)
            .await?;
        let response: Envelope<DataPayload<Balance>> = serde_json::from_slice(&raw)?;

        let balance = response
            .into_result()?
            .data
            .into_iter()
            .next()
            .ok_or_else(|| SpiralError::BalanceNotFound(currency.to_string()))?;

        Ok(balance)
    }

    /// Get the account's trade history
    ///
    /// # Arguments
    /// * `symbol` - Trading pair to filter on
    /// * `count` - Maximum number of trades; 0 means the default page of 1000
    #[instrument(skip(self))]
    pub async fn get_trades(&self, symbol: &str, count: u32) -> RestResult<Vec<Trade>> {
        let count = if count > 0 { count } else { DEFAULT_TRADE_COUNT };
        let params = BTreeMap::from([
            ("symbol".to_string(), symbol.to_string()),
            ("count".to_string(), count.to_string()),
        ]);

        debug!("Fetching up to {} trades for {}", count, symbol);

        let raw = self
            .client
            .execute(Method::GET, "trades", &params, true)
            .await?;
        let response: Envelope<TradesPayload> = serde_json::from_slice(&raw)?;

        Ok(response.into_result()?.trades)
    }
}
