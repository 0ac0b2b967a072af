//! Integration tests for the REST client against a mock Spiral server

use std::time::Duration;

use serde_json::json;
use spiral_rest::{
    ClientConfig, Credentials, OrderRequest, OrderStatus, RestError, Side, SpiralRestClient,
};
use spiral_types::Period;
use wiremock::matchers::{body_string_contains, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn public_client(server: &MockServer) -> SpiralRestClient {
    SpiralRestClient::with_config(ClientConfig::new().with_base_url(server.uri()))
}

fn auth_client(server: &MockServer) -> SpiralRestClient {
    SpiralRestClient::with_config(
        ClientConfig::new()
            .with_base_url(server.uri())
            .with_credentials(Credentials::new("test-key", "test-secret")),
    )
}

#[tokio::test]
async fn currencies_decode_from_data_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/currencies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "msg": "",
            "data": [{
                "id": 1,
                "code": "BTC",
                "name": "Bitcoin",
                "precision": 8,
                "can_deposit": true,
                "can_withdrawal": true,
                "min_confirms": 2,
                "withdrawal_fee": "0.0005",
                "withdraw_min_amount": "0.001"
            }]
        })))
        .mount(&server)
        .await;

    let currencies = public_client(&server).get_currencies().await.unwrap();
    assert_eq!(currencies.len(), 1);
    assert_eq!(currencies[0].code, "BTC");
    assert_eq!(currencies[0].withdrawal_fee, 0.0005);
}

#[tokio::test]
async fn klines_pass_query_params_and_decode_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/klines"))
        .and(query_param("symbol", "BTCUSDT"))
        .and(query_param("period", "60"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "msg": "",
            "data": [
                [1609459200, "100.0", "110.0", "95.0", "105.0", "10.5", 1609462800, "", 42],
                [1609462800, "105.0", "112.0", "104.0", "111.0", "8.2", 1609466400, "", 17]
            ]
        })))
        .mount(&server)
        .await;

    let klines = public_client(&server)
        .get_klines("BTCUSDT", Period::H1, 2)
        .await
        .unwrap();
    assert_eq!(klines.len(), 2);
    assert_eq!(klines[0].open_ts, 1609459200);
    assert_eq!(klines[0].close, 105.0);
    assert_eq!(klines[1].trade_count, 17);
}

#[tokio::test]
async fn orderbook_partitions_sides_with_best_bid_first() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orderbook"))
        .and(query_param("symbol", "BTCUSDT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "msg": "",
            "symbol": "BTCUSDT",
            "last_update_id": 99,
            "data": [
                ["99", "2", "bid"],
                ["100", "1", "bid"],
                ["101", "1", "ask"]
            ]
        })))
        .mount(&server)
        .await;

    let book = public_client(&server)
        .get_orderbook("BTCUSDT", 20)
        .await
        .unwrap();
    assert_eq!(book.last_update_id, 99);
    assert_eq!(book.bids[0].price, 100.0);
    assert_eq!(book.bids[1].price, 99.0);
    assert_eq!(book.asks[0].price, 101.0);
}

#[tokio::test]
async fn one_sided_orderbook_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orderbook"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "msg": "",
            "symbol": "BTCUSDT",
            "last_update_id": 1,
            "data": [["99", "2", "bid"], ["100", "1", "bid"]]
        })))
        .mount(&server)
        .await;

    let err = public_client(&server)
        .get_orderbook("BTCUSDT", 20)
        .await
        .unwrap_err();
    assert!(matches!(err, RestError::Data(_)));
}

#[tokio::test]
async fn nonzero_error_code_surfaces_the_exchange_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/currencies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 1002,
            "msg": "symbol suspended"
        })))
        .mount(&server)
        .await;

    let err = public_client(&server).get_currencies().await.unwrap_err();
    assert_eq!(err.exchange_code(), Some(1002));
    assert!(err.to_string().contains("symbol suspended"));
}

#[tokio::test]
async fn http_401_passes_through_to_the_envelope_gate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wallet/balances"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": 10001,
            "msg": "signature expired"
        })))
        .mount(&server)
        .await;

    let err = auth_client(&server).get_balances().await.unwrap_err();
    // Surfaced as the exchange's own error, not as a transport failure
    assert_eq!(err.exchange_code(), Some(10001));
}

#[tokio::test]
async fn other_http_statuses_are_transport_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/currencies"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = public_client(&server).get_currencies().await.unwrap_err();
    assert!(matches!(err, RestError::Status { code: 503, .. }));
}

#[tokio::test]
async fn slow_responses_hit_the_timeout_race() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/currencies"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"code": 0, "msg": "", "data": []}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = SpiralRestClient::with_config(
        ClientConfig::new()
            .with_base_url(server.uri())
            .with_timeout(Duration::from_millis(250)),
    );

    let err = client.get_currencies().await.unwrap_err();
    assert!(err.is_timeout());
}

#[tokio::test]
async fn private_calls_without_credentials_fail_fast() {
    // No server needed: the configuration error fires before any I/O
    let client = SpiralRestClient::new();
    assert!(matches!(
        client.get_balances().await,
        Err(RestError::AuthRequired)
    ));

    // Present-but-empty credentials are just as unusable
    let client = SpiralRestClient::with_credentials(Credentials::new("", ""));
    assert!(matches!(
        client.get_balances().await,
        Err(RestError::AuthRequired)
    ));
}

#[tokio::test]
async fn authenticated_calls_carry_the_three_auth_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wallet/balances"))
        .and(header("api-key", "test-key"))
        .and(header_exists("api-expires"))
        .and(header_exists("api-signature"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "msg": "",
            "data": [{
                "currency": "BTC",
                "available": "1.5",
                "locked": "0.25",
                "timestamp": 1609459200
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let balances = auth_client(&server).get_balances().await.unwrap();
    assert_eq!(balances.len(), 1);
    assert_eq!(balances[0].available, 1.5);
}

#[tokio::test]
async fn balance_lookup_on_empty_result_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wallet/balances"))
        .and(query_param("currency", "LTC"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"code": 0, "msg": "", "data": []})),
        )
        .mount(&server)
        .await;

    let err = auth_client(&server).get_balance("LTC").await.unwrap_err();
    assert!(matches!(err, RestError::Data(_)));
    assert!(err.to_string().contains("LTC"));
}

#[tokio::test]
async fn open_orders_send_the_json_filter_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/order"))
        .and(query_param("count", "50"))
        .and(query_param("filter", "{\"open\":true}"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "msg": "",
            "orders": [{
                "id": 7,
                "clt_ord_id": "mine-1",
                "symbol": "BTCUSDT",
                "side": "bid",
                "price": "20000.0",
                "filled_price": "0",
                "quantity": "0.01",
                "filled_quantity": "0",
                "type": "limit",
                "status": "accepted",
                "create_time": 1609459200,
                "update_time": 1609459201
            }]
        })))
        .mount(&server)
        .await;

    let orders = auth_client(&server).get_open_orders(50).await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].status, OrderStatus::Accepted);
}

#[tokio::test]
async fn place_order_posts_fixed_precision_amounts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/order"))
        .and(header_exists("api-signature"))
        .and(body_string_contains("\"quantity\":\"0.01000000\""))
        .and(body_string_contains("\"price\":\"20000.00000000\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "msg": "",
            "order": {
                "id": 42,
                "clt_ord_id": "mine-2",
                "user_id": 9,
                "symbol": "BTCUSDT",
                "side": "bid",
                "price": "20000.0",
                "quantity": "0.01",
                "type": "limit",
                "status": "submitted",
                "create_time": 1609459200,
                "update_time": 1609459200
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request =
        OrderRequest::limit("BTCUSDT", Side::Bid, 0.01, 20000.0).with_client_order_id("mine-2");
    let placed = auth_client(&server).place_order(&request).await.unwrap();
    assert_eq!(placed.id, 42);
    assert_eq!(placed.status, OrderStatus::Submitted);
}

#[tokio::test]
async fn cancel_order_sends_delete_and_checks_the_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/order"))
        .and(query_param("order_id", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0, "msg": ""})))
        .expect(1)
        .mount(&server)
        .await;

    auth_client(&server).cancel_order("42").await.unwrap();
}

#[tokio::test]
async fn cancel_all_passes_symbol_and_filter_through() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/order/all"))
        .and(query_param("symbol", "BTCUSDT"))
        .and(query_param("filter", "side=bid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0, "msg": ""})))
        .expect(1)
        .mount(&server)
        .await;

    auth_client(&server)
        .cancel_all_orders("BTCUSDT", "side=bid")
        .await
        .unwrap();
}

#[tokio::test]
async fn cancel_rejection_surfaces_the_exchange_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/order"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 2001,
            "msg": "order already filled"
        })))
        .mount(&server)
        .await;

    let err = auth_client(&server).cancel_order("42").await.unwrap_err();
    assert_eq!(err.exchange_code(), Some(2001));
}
