//! Integration tests for the HTTP API.
//!
//! These tests drive the full router with a static price feed and verify
//! status codes and response bodies for each endpoint.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use swap_hex::{ConversionService, inbound::HttpServer};
use swap_prices::StaticPriceSource;
use tower::ServiceExt;

const PRICES: &str = r#"[
    {"currency": "USD", "date": "2024-01-01", "price": 1},
    {"currency": "ETH", "date": "2024-01-01", "price": 2000},
    {"currency": "USD", "date": "2024-01-02", "price": 1.1},
    {"currency": "DEAD", "date": "2024-01-01", "price": 0}
]"#;

/// Helper to create a router over a fixed payload.
fn app(payload: &str) -> axum::Router {
    let source = StaticPriceSource::from_json(payload.to_string());
    HttpServer::new(ConversionService::new(source)).router()
}

fn convert_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/convert")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health() {
    let response = app(PRICES)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "healthy");
}

#[tokio::test]
async fn test_list_prices_is_deduplicated_and_sorted() {
    let response = app(PRICES)
        .oneshot(
            Request::builder()
                .uri("/api/prices")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    let prices = json.as_array().unwrap();
    assert_eq!(prices.len(), 3);
    assert_eq!(prices[0]["currency"], "DEAD");
    assert_eq!(prices[1]["currency"], "ETH");
    assert_eq!(prices[2]["currency"], "USD");
    assert_eq!(prices[2]["price"], 1.1);
    assert_eq!(prices[2]["date"], "2024-01-02T00:00:00.000Z");
}

#[tokio::test]
async fn test_convert_success() {
    let payload = r#"[
        {"currency": "USD", "date": "2024-01-01", "price": 1},
        {"currency": "ETH", "date": "2024-01-01", "price": 2000}
    ]"#;
    let response = app(payload)
        .oneshot(convert_request(
            r#"{"inputAmount": 2, "inputCurrency": "USD", "outputCurrency": "ETH"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["inputCurrency"], "USD");
    assert_eq!(json["outputCurrency"], "ETH");
    assert_eq!(json["inputAmount"], 2.0);
    assert_eq!(json["exchangeRate"], 2000.0);
    assert_eq!(json["outputAmount"], 4000.0);
}

#[tokio::test]
async fn test_convert_rejects_same_currency() {
    let response = app(PRICES)
        .oneshot(convert_request(
            r#"{"inputAmount": 2, "inputCurrency": "USD", "outputCurrency": "USD"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(
        json["error"],
        "Input and output currencies cannot be the same"
    );
    assert_eq!(json["code"], 400);
}

#[tokio::test]
async fn test_convert_rejects_small_amount() {
    let response = app(PRICES)
        .oneshot(convert_request(
            r#"{"inputAmount": 0.5, "inputCurrency": "USD", "outputCurrency": "ETH"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "Amount must be at least 1");
}

#[tokio::test]
async fn test_convert_unknown_currency() {
    let response = app(PRICES)
        .oneshot(convert_request(
            r#"{"inputAmount": 1, "inputCurrency": "USD", "outputCurrency": "BTC"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_body(response).await["error"], "Invalid token price!");
}

#[tokio::test]
async fn test_convert_zero_source_price() {
    let response = app(PRICES)
        .oneshot(convert_request(
            r#"{"inputAmount": 1, "inputCurrency": "DEAD", "outputCurrency": "USD"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_convert_with_malformed_feed() {
    let response = app(r#"[{"currency": "USD", "date": "2024-01-01"}]"#)
        .oneshot(convert_request(
            r#"{"inputAmount": 1, "inputCurrency": "USD", "outputCurrency": "ETH"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = json_body(response).await;
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .starts_with("Malformed price data")
    );
}

#[tokio::test]
async fn test_prices_with_unavailable_feed() {
    let source = StaticPriceSource::from_file("/definitely/not/here/prices.json");
    let router = HttpServer::new(ConversionService::new(source)).router();

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/prices")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_convert_missing_field_is_bad_request() {
    let response = app(PRICES)
        .oneshot(convert_request(
            r#"{"inputAmount": 1, "inputCurrency": "USD"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["code"], 400);
    assert!(json["error"].as_str().unwrap().contains("outputCurrency"));
}

#[tokio::test]
async fn test_convert_wrong_typed_field_is_bad_request() {
    let response = app(PRICES)
        .oneshot(convert_request(
            r#"{"inputAmount": "2", "inputCurrency": "USD", "outputCurrency": "ETH"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], 400);
}

#[tokio::test]
async fn test_convert_invalid_json_is_bad_request() {
    let response = app(PRICES)
        .oneshot(convert_request("{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], 400);
}
