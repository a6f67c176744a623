//! Order-request validation
//!
//! Structural checks always run; catalog-backed checks run only when
//! the corresponding [`OrderPolicy`] flag is on. By default an order
//! is recorded without the catalog ever being consulted.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::catalog::CatalogStore;
use crate::config::OrderPolicy;

use super::models::{OrderCreateRequest, OrderItem, ValidatedOrder};

/// A business-rule rejection, carrying the offending field path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Validate an order-create request against the field rules and, per
/// policy, against the catalog. No side effects; the ledger only ever
/// sees requests that passed.
pub fn validate(
    req: OrderCreateRequest,
    catalog: &CatalogStore,
    policy: &OrderPolicy,
) -> Result<ValidatedOrder, ValidationError> {
    if req.merchant_id.is_empty() {
        return Err(ValidationError::new("merchantId", "must not be empty"));
    }
    if req.items.is_empty() {
        return Err(ValidationError::new("items", "must not be empty"));
    }
    if req.order_type.is_empty() {
        return Err(ValidationError::new("orderType", "must not be empty"));
    }
    if req.total_price < Decimal::ZERO {
        return Err(ValidationError::new("totalPrice", "must not be negative"));
    }

    if policy.verify_merchant_exists && !catalog.has_merchant(&req.merchant_id) {
        return Err(ValidationError::new("merchantId", "unknown merchant"));
    }

    let mut items = Vec::with_capacity(req.items.len());
    for (idx, item) in req.items.into_iter().enumerate() {
        if item.product_id.is_empty() {
            return Err(ValidationError::new(
                format!("items[{}].productId", idx),
                "must not be empty",
            ));
        }
        if item.quantity < 1 {
            return Err(ValidationError::new(
                format!("items[{}].quantity", idx),
                "must be a positive integer",
            ));
        }
        let quantity = u32::try_from(item.quantity).map_err(|_| {
            ValidationError::new(format!("items[{}].quantity", idx), "out of range")
        })?;

        if policy.verify_product_ids {
            let product = catalog
                .product(&req.merchant_id, &item.product_id)
                .ok_or_else(|| {
                    ValidationError::new(
                        format!("items[{}].productId", idx),
                        "unknown product for this merchant",
                    )
                })?;
            if let (Some(spec), Some(specs)) = (&item.spec, &product.specs) {
                if !specs.contains(spec) {
                    return Err(ValidationError::new(
                        format!("items[{}].spec", idx),
                        "not offered for this product",
                    ));
                }
            }
        }

        items.push(OrderItem {
            product_id: item.product_id,
            quantity,
            spec: item.spec,
        });
    }

    if policy.verify_total {
        verify_total(&req.merchant_id, &items, req.total_price, catalog)?;
    }

    Ok(ValidatedOrder {
        merchant_id: req.merchant_id,
        items,
        total_price: req.total_price,
        order_type: req.order_type,
    })
}

/// Recompute the total from the catalog's standard prices and compare.
///
/// Only meaningful when every line resolves against the catalog; lines
/// the catalog cannot resolve are left to `verify_merchant_exists` /
/// `verify_product_ids` and skip the check here.
fn verify_total(
    merchant_id: &str,
    items: &[OrderItem],
    claimed: Decimal,
    catalog: &CatalogStore,
) -> Result<(), ValidationError> {
    let mut expected = Decimal::ZERO;
    for item in items {
        match catalog.product(merchant_id, &item.product_id) {
            Some(product) => expected += product.price * Decimal::from(item.quantity),
            None => return Ok(()),
        }
    }
    if expected != claimed {
        return Err(ValidationError::new(
            "totalPrice",
            format!("does not match menu prices (expected {})", expected),
        ));
    }
    Ok(())
}
