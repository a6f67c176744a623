//! Storefront Gateway entry point
//!
//! ```text
//! ┌──────────┐    ┌───────────┐    ┌──────────┐
//! │  Config  │───▶│  Catalog  │───▶│ Gateway  │
//! │  (YAML)  │    │  (fixture)│    │  (axum)  │
//! └──────────┘    └───────────┘    └──────────┘
//! ```
//!
//! The catalog is loaded once and shared read-only; the order ledger
//! starts empty and lives for the process lifetime.

use std::sync::Arc;

use storefront_gateway::catalog::CatalogStore;
use storefront_gateway::config::AppConfig;
use storefront_gateway::gateway::{self, state::AppState};
use storefront_gateway::logging::init_logging;
use storefront_gateway::orders::OrderLedger;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--env" && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env)?;
    let _guard = init_logging(&config);

    tracing::info!(env = %env, "starting storefront gateway");

    let catalog = CatalogStore::load(&config.catalog_file)?;
    tracing::info!(
        merchants = catalog.merchants().len(),
        fixture = %config.catalog_file,
        "catalog loaded"
    );

    let state = AppState::new(
        Arc::new(catalog),
        Arc::new(OrderLedger::new()),
        config.order_policy,
    );

    gateway::run_server(&config.gateway, state).await
}
