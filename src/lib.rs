//! Storefront Gateway - multi-tenant food-ordering backend.
//!
//! A small catalog-and-order service: static merchant/menu data served
//! read-only, plus an append-only in-process order ledger.
//!
//! # Modules
//!
//! - [`catalog`] - Merchant and product store (read-only after load)
//! - [`orders`] - Order ledger, request validation
//! - [`gateway`] - Axum HTTP layer (routes, handlers, error mapping)
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing/file-appender setup

pub mod catalog;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod orders;

// Convenient re-exports at crate root
pub use catalog::{CatalogError, CatalogStore, Features, Merchant, Product, ThemeConfig};
pub use config::{AppConfig, GatewayConfig, OrderPolicy};
pub use orders::{
    Order, OrderCreateRequest, OrderItem, OrderLedger, OrderReceipt, OrderStatus, ValidatedOrder,
    ValidationError,
};
