//! Main REST client implementation

use crate::endpoints::{AccountEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use reqwest::Client;
use spiral_auth::Credentials;
use spiral_types::{
    Balance, Currency, KLine, Order, OrderHistoryRequest, OrderRequest, Orderbook, Period,
    PlacedOrder, SymbolInfo, Trade,
};
use std::time::Duration;
use tracing::info;

/// Spiral REST API endpoint
pub const API_BASE: &str = "https://api.spiral.exchange/api/v1";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Spiral REST API client
///
/// Provides access to both public and private endpoints. Cloning is cheap:
/// the underlying HTTP connection pool is shared, and no call mutates client
/// state, so a clone can be used freely across tasks.
///
/// # Example
///
/// ```no_run
/// use spiral_rest::{Credentials, SpiralRestClient};
/// use spiral_types::Period;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = SpiralRestClient::new();
///     let book = client.get_orderbook("BTCUSDT", 20).await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = SpiralRestClient::with_credentials(creds);
///     let balances = auth_client.get_balances().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct SpiralRestClient {
    pub(crate) http_client: Client,
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
    pub(crate) debug: bool,
    pub(crate) credentials: Option<Credentials>,
}

impl SpiralRestClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self::with_config(ClientConfig::default().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        // No timeout on the pool itself; the per-request race in transport
        // enforces the configured timeout.
        let http_client = Client::builder()
            .user_agent(config.user_agent.as_deref().unwrap_or("spiral-rest/0.1.0"))
            .build()
            .expect("Failed to create HTTP client");

        Self::with_http_client(http_client, config)
    }

    /// Create a new client around a preconfigured `reqwest::Client`
    ///
    /// The configured timeout is still enforced by the request race.
    pub fn with_http_client(http_client: Client, config: ClientConfig) -> Self {
        info!("Created Spiral REST client");

        Self {
            http_client,
            base_url: config.base_url,
            timeout: config.timeout,
            debug: config.debug,
            credentials: config.credentials,
        }
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Enable or disable verbose request/response dumping
    ///
    /// Dumps go to the `tracing` debug level and never alter request
    /// semantics.
    pub fn set_debug(&mut self, enable: bool) {
        self.debug = enable;
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(self)
    }

    /// Get all supported currencies along with their metadata
    pub async fn get_currencies(&self) -> RestResult<Vec<Currency>> {
        self.market().get_currencies().await
    }

    /// Get the open and available trading markets along with their metadata
    pub async fn get_symbols(&self) -> RestResult<Vec<SymbolInfo>> {
        self.market().get_symbols().await
    }

    /// Get candle data for a trading pair
    pub async fn get_klines(
        &self,
        symbol: &str,
        period: Period,
        limit: u32,
    ) -> RestResult<Vec<KLine>> {
        self.market().get_klines(symbol, period, limit).await
    }

    /// Get the current order book for a trading pair
    pub async fn get_orderbook(&self, symbol: &str, limit: u32) -> RestResult<Orderbook> {
        self.market().get_orderbook(symbol, limit).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        if !self.has_credentials() {
            return Err(RestError::AuthRequired);
        }
        Ok(AccountEndpoints::new(self))
    }

    /// Get all balances of the account wallet
    pub async fn get_balances(&self) -> RestResult<Vec<Balance>> {
        self.account()?.get_balances().await
    }

    /// Get the balance of a single currency
    pub async fn get_balance(&self, currency: &str) -> RestResult<Balance> {
        self.account()?.get_balance(currency).await
    }

    /// Get the account's trade history
    pub async fn get_trades(&self, symbol: &str, count: u32) -> RestResult<Vec<Trade>> {
        self.account()?.get_trades(symbol, count).await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        if !self.has_credentials() {
            return Err(RestError::AuthRequired);
        }
        Ok(TradingEndpoints::new(self))
    }

    /// Place a new order
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<PlacedOrder> {
        self.trading()?.place_order(order).await
    }

    /// Query an order by its client order id
    pub async fn get_order(&self, client_order_id: &str) -> RestResult<Vec<Order>> {
        self.trading()?.get_order(client_order_id).await
    }

    /// Query the account's order history
    pub async fn get_order_history(&self, request: &OrderHistoryRequest) -> RestResult<Vec<Order>> {
        self.trading()?.get_order_history(request).await
    }

    /// Query the account's open orders
    pub async fn get_open_orders(&self, count: u32) -> RestResult<Vec<Order>> {
        self.trading()?.get_open_orders(count).await
    }

    /// Cancel a pending order
    pub async fn cancel_order(&self, order_id: &str) -> RestResult<()> {
        self.trading()?.cancel_order(order_id).await
    }

    /// Cancel all orders on a symbol matching a filter
    pub async fn cancel_all_orders(&self, symbol: &str, filter: &str) -> RestResult<()> {
        self.trading()?.cancel_all_orders(symbol, filter).await
    }
}

impl Default for SpiralRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SpiralRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpiralRestClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Request timeout
    pub timeout: Duration,
    /// API base URL
    pub base_url: String,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Dump requests and responses at the tracing debug level
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            timeout: DEFAULT_TIMEOUT,
            base_url: API_BASE.to_string(),
            user_agent: None,
            debug: false,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a custom user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Enable request/response dumping
    pub fn with_debug(mut self, enable: bool) -> Self {
        self.debug = enable;
        self
    }
}
