//! Catalog store: insertion-ordered merchants plus per-merchant menus
//!
//! Populated once from a YAML fixture and never mutated afterwards, so
//! the gateway shares it behind a plain `Arc` with no locking.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use std::fs;
use thiserror::Error;

use super::models::{Merchant, Product};

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Merchant not found")]
    MerchantNotFound,
    #[error("duplicate merchant id: {0}")]
    DuplicateMerchant(String),
    #[error("duplicate product id {product} for merchant {merchant}")]
    DuplicateProduct { merchant: String, product: String },
}

/// One merchant plus its menu, as laid out in the catalog fixture
#[derive(Debug, Clone, Deserialize)]
pub struct MerchantSeed {
    #[serde(flatten)]
    pub merchant: Merchant,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Root of the catalog fixture file
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub merchants: Vec<MerchantSeed>,
}

/// Read-only merchant/product store
#[derive(Debug)]
pub struct CatalogStore {
    /// Merchants in fixture order (the order `/api/merchants` returns)
    merchants: Vec<Merchant>,
    /// Menu per merchant id; every known merchant has an entry, possibly empty
    menus: FxHashMap<String, Vec<Product>>,
}

impl CatalogStore {
    /// Load the catalog from a YAML fixture file
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read catalog fixture {}: {}", path, e))?;
        let config: CatalogConfig = serde_yaml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog fixture {}: {}", path, e))?;
        Ok(Self::from_config(config)?)
    }

    /// Build the store, enforcing id uniqueness invariants
    pub fn from_config(config: CatalogConfig) -> Result<Self, CatalogError> {
        let mut merchants = Vec::with_capacity(config.merchants.len());
        let mut menus = FxHashMap::default();

        for seed in config.merchants {
            let merchant_id = seed.merchant.id.clone();
            if menus.contains_key(&merchant_id) {
                return Err(CatalogError::DuplicateMerchant(merchant_id));
            }

            let mut seen = FxHashSet::default();
            for product in &seed.products {
                if !seen.insert(product.id.as_str()) {
                    return Err(CatalogError::DuplicateProduct {
                        merchant: merchant_id,
                        product: product.id.clone(),
                    });
                }
            }

            menus.insert(merchant_id, seed.products);
            merchants.push(seed.merchant);
        }

        Ok(Self { merchants, menus })
    }

    /// All merchants, in fixture order
    pub fn merchants(&self) -> &[Merchant] {
        &self.merchants
    }

    /// Menu for one merchant, in fixture order.
    ///
    /// Unknown merchant is an error; a known merchant with no products
    /// yields an empty slice.
    pub fn menu(&self, merchant_id: &str) -> Result<&[Product], CatalogError> {
        self.menus
            .get(merchant_id)
            .map(Vec::as_slice)
            .ok_or(CatalogError::MerchantNotFound)
    }

    /// Whether the merchant id is known
    pub fn has_merchant(&self, merchant_id: &str) -> bool {
        self.menus.contains_key(merchant_id)
    }

    /// Look up one product within one merchant's menu
    pub fn product(&self, merchant_id: &str, product_id: &str) -> Option<&Product> {
        self.menus
            .get(merchant_id)?
            .iter()
            .find(|p| p.id == product_id)
    }
}
