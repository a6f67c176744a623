//! Order types
//!
//! - `OrderCreateRequest`: HTTP request deserialization, loosely typed
//! - `ValidatedOrder`: output of [`crate::orders::validate`], ready to record
//! - `Order`: the ledger record
//! - `OrderReceipt`: HTTP response for an accepted order

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order status as stored and served.
///
/// Only one state is ever observable: an order exists iff it was paid.
/// The wire literal matches what the storefront frontend expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "已支付")]
    Paid,
}

/// One line of an order as submitted by the client.
///
/// `quantity` stays `i64` here so that zero and negative values survive
/// deserialization and are rejected by the validator with a field path,
/// rather than dying in serde as a bare type error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: String,
    pub quantity: i64,
    #[serde(default)]
    pub spec: Option<String>,
}

/// Order-create request body (POST /api/orders)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreateRequest {
    pub merchant_id: String,
    pub items: Vec<OrderItemRequest>,
    pub total_price: Decimal,
    pub order_type: String,
}

/// A validated order line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<String>,
}

/// A request that has passed validation and is ready for the ledger
#[derive(Debug, Clone)]
pub struct ValidatedOrder {
    pub merchant_id: String,
    pub items: Vec<OrderItem>,
    pub total_price: Decimal,
    pub order_type: String,
}

/// The full order record as kept by the ledger
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Stringified sequential id assigned by the ledger
    pub id: String,
    pub merchant_id: String,
    pub items: Vec<OrderItem>,
    pub total_price: Decimal,
    /// Free-form tag from the client (dine-in/pickup/delivery/express)
    pub order_type: String,
    pub status: OrderStatus,
}

/// Response for an accepted order
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub success: bool,
    pub order_id: String,
}
