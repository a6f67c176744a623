//! HTTP handlers for the catalog and order endpoints

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde::Serialize;

use crate::catalog::{Merchant, Product};
use crate::orders::{self, Order, OrderCreateRequest, OrderReceipt};

use super::state::AppState;
use super::types::ApiError;

/// GET /api/merchants
pub async fn list_merchants(State(state): State<AppState>) -> Json<Vec<Merchant>> {
    Json(state.catalog.merchants().to_vec())
}

/// GET /api/merchants/{merchant_id}/menu
///
/// 404 for an unknown merchant; a known merchant with no products gets
/// an empty array, not an error.
pub async fn get_menu(
    State(state): State<AppState>,
    Path(merchant_id): Path<String>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let menu = state
        .catalog
        .menu(&merchant_id)
        .map_err(|_| ApiError::NotFound("Merchant not found".to_string()))?;
    Ok(Json(menu.to_vec()))
}

/// POST /api/orders
///
/// A body that fails to deserialize is a 400 (malformed); a body that
/// deserializes but breaks a field rule is a 422 carrying the field
/// path. Nothing reaches the ledger on either failure.
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<OrderCreateRequest>, JsonRejection>,
) -> Result<Json<OrderReceipt>, ApiError> {
    let Json(req) = payload?;
    tracing::info!(
        target: "ORDER_TRACE",
        merchant_id = %req.merchant_id,
        items = req.items.len(),
        order_type = %req.order_type,
        "order request received"
    );

    let validated = orders::validate(req, &state.catalog, &state.policy).inspect_err(|e| {
        tracing::warn!(field = %e.field, reason = %e.reason, "order rejected");
    })?;

    let receipt = state.ledger.create(validated);
    Ok(Json(receipt))
}

/// GET /api/orders
pub async fn list_orders(State(state): State<AppState>) -> Json<Vec<Order>> {
    Json(state.ledger.orders())
}

/// Health check response data
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /api/health
///
/// The service has no external dependencies to probe; reachable means
/// healthy.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
