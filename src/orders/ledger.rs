//! Append-only in-process order ledger
//!
//! Id assignment and append happen inside one mutex section, so
//! concurrent creates can never share an id or interleave a record.

use std::sync::Mutex;

use super::models::{Order, OrderReceipt, OrderStatus, ValidatedOrder};

/// First id handed out. Only uniqueness and monotonicity are
/// contractual; the starting point is cosmetic.
pub const FIRST_ORDER_ID: u64 = 1000;

struct LedgerInner {
    next_id: u64,
    orders: Vec<Order>,
}

pub struct OrderLedger {
    inner: Mutex<LedgerInner>,
}

impl Default for OrderLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::with_first_id(FIRST_ORDER_ID)
    }

    pub fn with_first_id(first_id: u64) -> Self {
        Self {
            inner: Mutex::new(LedgerInner {
                next_id: first_id,
                orders: Vec::new(),
            }),
        }
    }

    /// Record a validated order: assign the next id, mark it paid,
    /// append. Exactly one append per call.
    pub fn create(&self, order: ValidatedOrder) -> OrderReceipt {
        let mut inner = self.inner.lock().expect("order ledger lock poisoned");

        let order_id = inner.next_id;
        inner.next_id += 1;

        let record = Order {
            id: order_id.to_string(),
            merchant_id: order.merchant_id,
            items: order.items,
            total_price: order.total_price,
            order_type: order.order_type,
            status: OrderStatus::Paid,
        };
        tracing::info!(
            target: "ORDER_TRACE",
            order_id,
            merchant_id = %record.merchant_id,
            items = record.items.len(),
            total = %record.total_price,
            "order recorded"
        );
        inner.orders.push(record);

        OrderReceipt {
            success: true,
            order_id: order_id.to_string(),
        }
    }

    /// Number of recorded orders
    pub fn len(&self) -> usize {
        self.inner.lock().expect("order ledger lock poisoned").orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all orders in insertion order
    pub fn orders(&self) -> Vec<Order> {
        self.inner
            .lock()
            .expect("order ledger lock poisoned")
            .orders
            .clone()
    }
}
