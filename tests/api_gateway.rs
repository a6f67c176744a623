//! End-to-end tests driving the gateway router without a socket.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use storefront_gateway::catalog::{
    CatalogConfig, CatalogStore, Features, Merchant, MerchantSeed, Product, ThemeConfig,
};
use storefront_gateway::config::OrderPolicy;
use storefront_gateway::gateway::{self, state::AppState};
use storefront_gateway::orders::OrderLedger;

fn seeded_catalog() -> CatalogStore {
    CatalogStore::from_config(CatalogConfig {
        merchants: vec![
            MerchantSeed {
                merchant: Merchant {
                    id: "TX1".to_string(),
                    name: "棠小一烘焙".to_string(),
                    slogan: "TANG XIAO YI".to_string(),
                    logo: "棠".to_string(),
                    mascot: "https://example.com/mascot.png".to_string(),
                    theme: ThemeConfig {
                        primary: "#f7e28b".to_string(),
                        secondary: "#d4b945".to_string(),
                        border_radius: "40px".to_string(),
                    },
                    features: Features {
                        dine_in: true,
                        pickup: true,
                        delivery: true,
                        express: true,
                        topup: true,
                        coupons: true,
                    },
                },
                products: vec![Product {
                    id: "1".to_string(),
                    name: "半条梦龙425g超大块".to_string(),
                    price: Decimal::new(389, 1),
                    vip_price: Some(Decimal::new(2934, 2)),
                    image: "https://example.com/p.png".to_string(),
                    category: "店铺线下活动".to_string(),
                    description: "浓郁巧克力".to_string(),
                    specs: Some(vec!["标准份".to_string(), "加大份".to_string()]),
                }],
            },
            MerchantSeed {
                merchant: Merchant {
                    id: "MIO".to_string(),
                    name: "Mio Coffee".to_string(),
                    slogan: "MIO BREW".to_string(),
                    logo: "M".to_string(),
                    mascot: "https://example.com/mio.png".to_string(),
                    theme: ThemeConfig {
                        primary: "#2D5A27".to_string(),
                        secondary: "#1A3317".to_string(),
                        border_radius: "12px".to_string(),
                    },
                    features: Features {
                        dine_in: true,
                        pickup: true,
                        delivery: false,
                        express: false,
                        topup: true,
                        coupons: true,
                    },
                },
                products: vec![],
            },
        ],
    })
    .unwrap()
}

fn app() -> (Router, Arc<OrderLedger>) {
    let ledger = Arc::new(OrderLedger::new());
    let state = AppState::new(
        Arc::new(seeded_catalog()),
        ledger.clone(),
        OrderPolicy::default(),
    );
    (gateway::router(state), ledger)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn pickup_order() -> Value {
    json!({
        "merchantId": "TX1",
        "items": [{"productId": "1", "quantity": 2}],
        "totalPrice": 77.8,
        "orderType": "pickup"
    })
}

#[tokio::test]
async fn merchants_are_listed_in_seed_order() {
    let (app, _) = app();
    let (status, body) = get(&app, "/api/merchants").await;
    assert_eq!(status, StatusCode::OK);
    let merchants = body.as_array().unwrap();
    assert_eq!(merchants.len(), 2);
    assert_eq!(merchants[0]["id"], "TX1");
    assert_eq!(merchants[1]["id"], "MIO");
    assert_eq!(merchants[0]["theme"]["borderRadius"], "40px");
    assert_eq!(merchants[1]["features"]["delivery"], false);
}

#[tokio::test]
async fn menu_returns_seeded_products() {
    let (app, _) = app();
    let (status, body) = get(&app, "/api/merchants/TX1/menu").await;
    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["id"], "1");
    assert_eq!(products[0]["price"], 38.9);
    assert_eq!(products[0]["vipPrice"], 29.34);
    assert_eq!(products[0]["specs"][0], "标准份");
}

#[tokio::test]
async fn empty_menu_is_empty_array_not_404() {
    let (app, _) = app();
    let (status, body) = get(&app, "/api/merchants/MIO/menu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn unknown_merchant_menu_is_404() {
    let (app, _) = app();
    let (status, body) = get(&app, "/api/merchants/unknown/menu").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Merchant not found");
}

#[tokio::test]
async fn orders_get_sequential_ids_from_1000() {
    let (app, ledger) = app();

    let (status, body) = post_json(&app, "/api/orders", pickup_order()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["orderId"], "1000");

    let (status, body) = post_json(&app, "/api/orders", pickup_order()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["orderId"], "1001");

    assert_eq!(ledger.len(), 2);
}

#[tokio::test]
async fn empty_items_is_422_and_not_recorded() {
    let (app, ledger) = app();
    let mut order = pickup_order();
    order["items"] = json!([]);
    let (status, body) = post_json(&app, "/api/orders", order).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "items");
    assert_eq!(ledger.len(), 0);
}

#[tokio::test]
async fn zero_quantity_is_422_with_field_path() {
    let (app, ledger) = app();
    let mut order = pickup_order();
    order["items"][0]["quantity"] = json!(0);
    let (status, body) = post_json(&app, "/api/orders", order).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "items[0].quantity");
    assert_eq!(ledger.len(), 0);
}

#[tokio::test]
async fn wrong_type_quantity_is_400_malformed() {
    let (app, ledger) = app();
    let mut order = pickup_order();
    order["items"][0]["quantity"] = json!("two");
    let (status, _) = post_json(&app, "/api/orders", order).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(ledger.len(), 0);
}

#[tokio::test]
async fn invalid_json_body_is_400() {
    let (app, _) = app();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/orders")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn orders_never_mutate_the_catalog() {
    let (app, _) = app();
    let (_, before) = get(&app, "/api/merchants/TX1/menu").await;
    post_json(&app, "/api/orders", pickup_order()).await;
    let (status, after) = get(&app, "/api/merchants/TX1/menu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(before, after);
}

#[tokio::test]
async fn recorded_orders_are_listed_in_insertion_order() {
    let (app, _) = app();
    post_json(&app, "/api/orders", pickup_order()).await;
    post_json(&app, "/api/orders", pickup_order()).await;

    let (status, body) = get(&app, "/api/orders").await;
    assert_eq!(status, StatusCode::OK);
    let orders = body.as_array().unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0]["id"], "1000");
    assert_eq!(orders[1]["id"], "1001");
    assert_eq!(orders[0]["status"], "已支付");
    assert_eq!(orders[0]["items"][0]["quantity"], 2);
}

#[tokio::test]
async fn health_endpoint_responds_ok() {
    let (app, _) = app();
    let (status, body) = get(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn cors_preflight_mirrors_origin_with_credentials() {
    let (app, _) = app();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/orders")
                .header(header::ORIGIN, "http://storefront.local")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let headers = response.headers();
    assert_eq!(
        headers["access-control-allow-origin"],
        "http://storefront.local"
    );
    assert_eq!(headers["access-control-allow-credentials"], "true");
}
