use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: LogRotation,
    pub enable_tracing: bool,
    /// Path to the YAML catalog fixture loaded at startup
    pub catalog_file: String,
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub order_policy: OrderPolicy,
}

/// Log file rotation cadence
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    #[default]
    Never,
    Daily,
    Hourly,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// Optional server-side order verification.
///
/// All checks default to off: the storefront frontend computes totals
/// client-side and expects any structurally valid order to be
/// recorded. Turning a flag on makes the validator reject requests
/// that reference unknown merchants/products or carry a total that
/// does not match the menu.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default)]
#[serde(default)]
pub struct OrderPolicy {
    pub verify_merchant_exists: bool,
    pub verify_product_ids: bool,
    pub verify_total: bool,
}

impl AppConfig {
    pub fn load(env: &str) -> anyhow::Result<Self> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config yaml: {}", config_path))
    }
}
