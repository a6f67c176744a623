use std::sync::Arc;

use crate::catalog::CatalogStore;
use crate::config::OrderPolicy;
use crate::orders::OrderLedger;

/// Gateway shared state
#[derive(Clone)]
pub struct AppState {
    /// Merchant/product catalog (read-only)
    pub catalog: Arc<CatalogStore>,
    /// Append-only order ledger
    pub ledger: Arc<OrderLedger>,
    /// Server-side order verification switches
    pub policy: OrderPolicy,
}

impl AppState {
    pub fn new(catalog: Arc<CatalogStore>, ledger: Arc<OrderLedger>, policy: OrderPolicy) -> Self {
        Self {
            catalog,
            ledger,
            policy,
        }
    }
}
