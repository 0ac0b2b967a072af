//! Records returned by the Spiral REST endpoints
//!
//! Monetary fields arrive as numeric strings on the wire and are decoded
//! into `f64` via [`f64_from_str`], which also tolerates bare numbers.

use serde::{Deserialize, Deserializer};

use crate::enums::{OrderStatus, OrderType, Side};

/// Deserialize a numeric string (or a bare number) into an f64
pub(crate) fn f64_from_str<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(f64),
    }

    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s.parse().map_err(D::Error::custom),
        StringOrNumber::Number(n) => Ok(n),
    }
}

/// Currency metadata
#[derive(Debug, Clone, Deserialize)]
pub struct Currency {
    pub id: i64,
    /// Currency code (e.g. "BTC")
    pub code: String,
    pub name: String,
    /// Display precision in decimal places
    pub precision: i64,
    pub can_deposit: bool,
    pub can_withdrawal: bool,
    /// Confirmations required before a deposit credits
    pub min_confirms: i64,
    #[serde(deserialize_with = "f64_from_str")]
    pub withdrawal_fee: f64,
    #[serde(deserialize_with = "f64_from_str")]
    pub withdraw_min_amount: f64,
}

/// Trading pair metadata
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolInfo {
    /// Pair name (e.g. "BTCUSDT")
    pub symbol: String,
    pub base_asset: String,
    pub base_asset_name: String,
    pub base_asset_unit: String,
    pub quote_asset: String,
    pub quote_asset_name: String,
    pub quote_asset_unit: String,
    /// Minimum price increment
    #[serde(deserialize_with = "f64_from_str")]
    pub tick_size: f64,
    /// Minimum order quantity
    #[serde(deserialize_with = "f64_from_str")]
    pub min_trade: f64,
    pub active: bool,
    pub status: String,
}

/// Balance of a single currency in the account wallet
#[derive(Debug, Clone, Deserialize)]
pub struct Balance {
    pub currency: String,
    /// Amount free for trading
    #[serde(deserialize_with = "f64_from_str")]
    pub available: f64,
    /// Amount held by open orders
    #[serde(deserialize_with = "f64_from_str")]
    pub locked: f64,
    pub timestamp: i64,
}

/// An executed trade from the account's trade history
#[derive(Debug, Clone, Deserialize)]
pub struct Trade {
    pub id: i64,
    pub side: Side,
    pub symbol: String,
    #[serde(deserialize_with = "f64_from_str")]
    pub price: f64,
    #[serde(deserialize_with = "f64_from_str")]
    pub quantity: f64,
    #[serde(deserialize_with = "f64_from_str")]
    pub fee: f64,
    pub timestamp: i64,
}

/// An order as reported by the order-query endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    /// Exchange-assigned order id
    pub id: i64,
    /// Caller-supplied id, if one was given at placement
    #[serde(rename = "clt_ord_id", default)]
    pub client_order_id: String,
    pub symbol: String,
    pub side: Side,
    #[serde(deserialize_with = "f64_from_str")]
    pub price: f64,
    #[serde(deserialize_with = "f64_from_str")]
    pub filled_price: f64,
    #[serde(deserialize_with = "f64_from_str")]
    pub quantity: f64,
    #[serde(deserialize_with = "f64_from_str")]
    pub filled_quantity: f64,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub create_time: i64,
    pub update_time: i64,
}

/// The order object returned when a placement is accepted
#[derive(Debug, Clone, Deserialize)]
pub struct PlacedOrder {
    pub id: i64,
    #[serde(rename = "clt_ord_id", default)]
    pub client_order_id: String,
    pub user_id: i64,
    pub symbol: String,
    pub side: Side,
    #[serde(deserialize_with = "f64_from_str")]
    pub price: f64,
    #[serde(deserialize_with = "f64_from_str")]
    pub quantity: f64,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub create_time: i64,
    pub update_time: i64,
}

/// Parameters for placing a new order
#[derive(Debug, Clone)]
pub struct OrderRequest {
    /// Caller-supplied order id, echoed back by the exchange
    pub client_order_id: String,
    pub symbol: String,
    pub side: Side,
    pub order_type: OrderType,
    pub quantity: f64,
    /// Limit price; ignored by the exchange for market orders
    pub price: f64,
}

impl OrderRequest {
    /// Create a limit order request
    pub fn limit(symbol: impl Into<String>, side: Side, quantity: f64, price: f64) -> Self {
        Self {
            client_order_id: String::new(),
            symbol: symbol.into(),
            side,
            order_type: OrderType::Limit,
            quantity,
            price,
        }
    }

    /// Create a market order request
    pub fn market(symbol: impl Into<String>, side: Side, quantity: f64) -> Self {
        Self {
            client_order_id: String::new(),
            symbol: symbol.into(),
            side,
            order_type: OrderType::Market,
            quantity,
            price: 0.0,
        }
    }

    /// Attach a client order id
    pub fn with_client_order_id(mut self, id: impl Into<String>) -> Self {
        self.client_order_id = id.into();
        self
    }
}

/// Filters for the order-history endpoint
#[derive(Debug, Clone)]
pub struct OrderHistoryRequest {
    pub symbol: String,
    pub side: Side,
    /// Raw filter expression, passed through unchanged
    pub filter: String,
    pub count: u32,
    /// Return newest orders first
    pub reverse: bool,
    /// Range start (Unix seconds), omitted when `None`
    pub start_time: Option<i64>,
    /// Range end (Unix seconds), omitted when `None`
    pub end_time: Option<i64>,
}

impl OrderHistoryRequest {
    pub fn new(symbol: impl Into<String>, side: Side) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            filter: String::new(),
            count: 100,
            reverse: false,
            start_time: None,
            end_time: None,
        }
    }

    /// Set the raw filter expression
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Set the maximum number of orders to return
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Return newest orders first
    pub fn newest_first(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Restrict results to a time range (Unix seconds)
    pub fn with_time_range(mut self, start: i64, end: i64) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }
}

/// Payload for the order-query endpoints
#[derive(Debug, Deserialize)]
pub struct OrdersPayload {
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// Payload for the trade-history endpoint
#[derive(Debug, Deserialize)]
pub struct TradesPayload {
    #[serde(default)]
    pub trades: Vec<Trade>,
}

/// Payload for the place-order endpoint
#[derive(Debug, Deserialize)]
pub struct PlacePayload {
    #[serde(default)]
    pub order: Option<PlacedOrder>,
}
