//! Order ledger and order-request validation

pub mod ledger;
pub mod models;
pub mod validate;

pub use ledger::{FIRST_ORDER_ID, OrderLedger};
pub use models::{
    Order, OrderCreateRequest, OrderItem, OrderItemRequest, OrderReceipt, OrderStatus,
    ValidatedOrder,
};
pub use validate::{ValidationError, validate};
