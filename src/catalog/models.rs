//! Catalog entity types
//!
//! All types serialize in camelCase, which is the wire format the
//! storefront frontend consumes. Prices are `rust_decimal::Decimal`
//! carried as plain JSON numbers (`serde-float`).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-merchant UI theme (colors and corner rounding as CSS strings)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub primary: String,
    pub secondary: String,
    pub border_radius: String,
}

/// Feature switches a merchant can enable for its storefront
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    pub dine_in: bool,
    pub pickup: bool,
    pub delivery: bool,
    pub express: bool,
    pub topup: bool,
    pub coupons: bool,
}

/// A storefront tenant. Immutable after catalog load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Merchant {
    /// Globally unique merchant identifier (e.g. "TX1")
    pub id: String,
    pub name: String,
    pub slogan: String,
    /// Logo glyph/text rendered by the frontend
    pub logo: String,
    /// Mascot image URL
    pub mascot: String,
    pub theme: ThemeConfig,
    pub features: Features,
}

/// A sellable item on one merchant's menu. Immutable after catalog load.
///
/// Product ids are unique within their owning merchant only; two
/// merchants may both sell a product "1".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Standard price, non-negative
    pub price: Decimal,
    /// Discounted member price, absent when no discount applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vip_price: Option<Decimal>,
    pub image: String,
    pub category: String,
    pub description: String,
    /// Ordered variant choices (e.g. sizes, hot/iced); absent when the
    /// product has no variants
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specs: Option<Vec<String>>,
}
