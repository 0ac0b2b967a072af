//! Order management endpoints
//!
//! These endpoints require authentication.

use crate::client::SpiralRestClient;
use crate::error::RestResult;
use reqwest::Method;
use spiral_types::{
    Ack, Envelope, Order, OrderHistoryRequest, OrderRequest, OrdersPayload, PlacePayload,
    PlacedOrder, SpiralError,
};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    client: &'a SpiralRestClient,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(client: &'a SpiralRestClient) -> Self {
        Self { client }
    }

    /// Place a new order
    ///
    /// Quantity and price are formatted with fixed 8-decimal precision, the
    /// granularity the exchange accepts.
    #[instrument(skip(self, order), fields(symbol = %order.symbol, side = %order.side, order_type = %order.order_type))]
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<PlacedOrder> {
        let params = BTreeMap::from([
            ("clt_ord_id".to_string(), order.client_order_id.clone()),
            ("symbol".to_string(), order.symbol.clone()),
            ("side".to_string(), order.side.as_str().to_string()),
            ("type".to_string(), order.order_type.as_str().to_string()),
            ("quantity".to_string(), format!("{:.8}", order.quantity)),
            ("price".to_string(), format!("{:.8}", order.price)),
        ]);

        debug!(
            "Placing {} {} order for {} {}",
            order.side, order.order_type, order.quantity, order.symbol
        );

        let raw = self
            .client
            .execute(Method::POST, "order", &params, true)
            .await?;
        let response: Envelope<PlacePayload> = serde_json::from_slice(&raw)?;

        let placed = response
            .into_result()?
            .order
            .ok_or(SpiralError::MissingPayload("order"))?;

        Ok(placed)
    }

    /// Query an order by its client order id
    #[instrument(skip(self))]
    pub async fn get_order(&self, client_order_id: &str) -> RestResult<Vec<Order>> {
        let params =
            BTreeMap::from([("clientOrderId".to_string(), client_order_id.to_string())]);

        debug!("Querying order {}", client_order_id);

        let raw = self
            .client
            .execute(Method::GET, "order", &params, true)
            .await?;
        let response: Envelope<OrdersPayload> = serde_json::from_slice(&raw)?;

        Ok(response.into_result()?.orders)
    }

    /// Query the account's order history
    #[instrument(skip(self, request), fields(symbol = %request.symbol))]
    pub async fn get_order_history(
        &self,
        request: &OrderHistoryRequest,
    ) -> RestResult<Vec<Order>> {
        let mut params = BTreeMap::from([
            ("symbol".to_string(), request.symbol.clone()),
            ("side".to_string(), request.side.as_str().to_string()),
            ("filter".to_string(), request.filter.clone()),
            ("count".to_string(), request.count.to_string()),
            ("reverse".to_string(), request.reverse.to_string()),
        ]);
        if let Some(start) = request.start_time {
            params.insert("start_time".to_string(), start.to_string());
        }
        if let Some(end) = request.end_time {
            params.insert("end_time".to_string(), end.to_string());
        }

        debug!("Fetching order history for {}", request.symbol);

        let raw = self
            .client
            .execute(Method::GET, "order", &params, true)
            .await?;
        let response: Envelope<OrdersPayload> = serde_json::from_slice(&raw)?;

        Ok(response.into_result()?.orders)
    }

    /// Query the account's open orders
    ///
    /// The open-orders filter is a JSON object passed as a single
    /// string-valued parameter alongside the count.
    #[instrument(skip(self))]
    pub async fn get_open_orders(&self, count: u32) -> RestResult<Vec<Order>> {
        let filter = serde_json::to_string(&serde_json::json!({ "open": true }))?;
        let params = BTreeMap::from([
            ("count".to_string(), count.to_string()),
            ("filter".to_string(), filter),
        ]);

        debug!("Fetching up to {} open orders", count);

        let raw = self
            .client
            .execute(Method::GET, "order", &params, true)
            .await?;
        let response: Envelope<OrdersPayload> = serde_json::from_slice(&raw)?;

        Ok(response.into_result()?.orders)
    }

    /// Cancel a pending order
    ///
    /// # Arguments
    /// * `order_id` - Exchange-assigned id of the order to cancel
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: &str) -> RestResult<()> {
        let params = BTreeMap::from([("order_id".to_string(), order_id.to_string())]);

        debug!("Cancelling order {}", order_id);

        let raw = self
            .client
            .execute(Method::DELETE, "order", &params, true)
            .await?;
        let response: Envelope<Ack> = serde_json::from_slice(&raw)?;
        response.into_result()?;

        Ok(())
    }

    /// Cancel all orders on a symbol matching a filter
    ///
    /// Both arguments are passed through to the exchange unchanged.
    #[instrument(skip(self))]
    pub async fn cancel_all_orders(&self, symbol: &str, filter: &str) -> RestResult<()> {
        let params = BTreeMap::from([
            ("symbol".to_string(), symbol.to_string()),
            ("filter".to_string(), filter.to_string()),
        ]);

        debug!("Cancelling all orders for {}", symbol);

        let raw = self
            .client
            .execute(Method::DELETE, "order/all", &params, true)
            .await?;
        let response: Envelope<Ack> = serde_json::from_slice(&raw)?;
        response.into_result()?;

        Ok(())
    }
}
