//! Merchant and product catalog
//!
//! Loaded once at startup from a YAML fixture, read-only afterwards.

pub mod models;
pub mod store;

pub use models::{Features, Merchant, Product, ThemeConfig};
pub use store::{CatalogConfig, CatalogError, CatalogStore, MerchantSeed};
