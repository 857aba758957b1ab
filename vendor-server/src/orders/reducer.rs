//! Event application
//!
//! Applying an event only moves the status. Event payload such as a reject
//! reason stays in the log and is never copied onto the order.

use shared::models::{Order, OrderEvent};

/// Apply one event to an order snapshot
pub fn apply(order: &mut Order, event: &OrderEvent) {
    debug_assert_eq!(order.id, event.order_id);
    order.status = event.kind.target_status();
}
