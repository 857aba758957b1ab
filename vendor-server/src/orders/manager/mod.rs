//! OrdersManager - vendor transitions and order queries
//!
//! # Transition Flow
//!
//! ```text
//! execute(action)
//!     ├─ 1. Begin write transaction
//!     ├─ 2. Load order snapshot (OrderNotFound if missing)
//!     ├─ 3. Allocate sequence, run action (InvalidTransition on wrong status)
//!     ├─ 4. Apply event to snapshot
//!     ├─ 5. Persist snapshot + event
//!     └─ 6. Commit transaction
//! ```
//!
//! A failed action drops the transaction uncommitted, so the order is unchanged.

mod error;
pub use error::*;

use super::actions::TransitionAction;
use super::reducer;
use super::storage::OrderStorage;
use chrono::NaiveDateTime;
use shared::models::{HistoryFilter, Order, OrderCounts, OrderEvent, OrderStatus};

/// Orders manager
pub struct OrdersManager {
    storage: OrderStorage,
}

impl std::fmt::Debug for OrdersManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrdersManager")
            .field("storage", &"<OrderStorage>")
            .finish()
    }
}

impl OrdersManager {
    /// Create a manager over an existing storage
    pub fn with_storage(storage: OrderStorage) -> Self {
        Self { storage }
    }

    /// Load live and archived orders into an empty store.
    ///
    /// Returns `false` when orders already exist (nothing written).
    pub fn seed(&self, live: &[Order], archived: &[Order]) -> ManagerResult<bool> {
        if !self.storage.is_empty()? {
            return Ok(false);
        }

        let txn = self.storage.begin_write()?;
        for order in live {
            self.storage.store_order(&txn, order)?;
        }
        for order in archived {
            self.storage.store_archived(&txn, order)?;
        }
        txn.commit().map_err(crate::db::StorageError::from)?;

        tracing::info!(
            live = live.len(),
            archived = archived.len(),
            "Seeded order store"
        );
        Ok(true)
    }

    // ========== Queries ==========

    /// Orders with the given status, newest first
    pub fn list(&self, status: OrderStatus) -> ManagerResult<Vec<Order>> {
        let mut orders: Vec<Order> = self
            .storage
            .get_all_orders()?
            .into_iter()
            .filter(|o| o.status == status)
            .collect();
        sort_newest_first(&mut orders);
        Ok(orders)
    }

    /// Per-status counts over live orders
    pub fn counts(&self) -> ManagerResult<OrderCounts> {
        let orders = self.storage.get_all_orders()?;
        Ok(OrderCounts::from_orders(&orders))
    }

    /// Single live order
    pub fn get(&self, order_id: &str) -> ManagerResult<Order> {
        self.storage
            .get_order(order_id)?
            .ok_or_else(|| ManagerError::OrderNotFound(order_id.to_string()))
    }

    /// Transition log of one live order
    pub fn events(&self, order_id: &str) -> ManagerResult<Vec<OrderEvent>> {
        // Unknown ids are reported rather than returning an empty log
        self.get(order_id)?;
        Ok(self.storage.get_events_for_order(order_id)?)
    }

    /// Archived orders plus live orders in a terminal status, filtered, newest first
    pub fn history(&self, filter: &HistoryFilter, now: NaiveDateTime) -> ManagerResult<Vec<Order>> {
        let mut orders = self.storage.get_archived_orders()?;
        orders.extend(
            self.storage
                .get_all_orders()?
                .into_iter()
                .filter(|o| o.status.is_terminal()),
        );
        orders.retain(|o| filter.matches(o, now));
        sort_newest_first(&mut orders);
        Ok(orders)
    }

    /// Latest `limit` live orders
    pub fn recent(&self, limit: usize) -> ManagerResult<Vec<Order>> {
        let mut orders = self.storage.get_all_orders()?;
        sort_newest_first(&mut orders);
        orders.truncate(limit);
        Ok(orders)
    }

    /// All live orders
    pub fn all(&self) -> ManagerResult<Vec<Order>> {
        Ok(self.storage.get_all_orders()?)
    }

    // ========== Transitions ==========

    pub fn accept(&self, order_id: &str) -> ManagerResult<Order> {
        self.execute(TransitionAction::accept(order_id))
    }

    pub fn reject(&self, order_id: &str, reason: Option<String>) -> ManagerResult<Order> {
        self.execute(TransitionAction::reject(order_id, reason))
    }

    pub fn complete(&self, order_id: &str) -> ManagerResult<Order> {
        self.execute(TransitionAction::complete(order_id))
    }

    /// Run one action in a single write transaction
    pub fn execute(&self, action: TransitionAction) -> ManagerResult<Order> {
        let txn = self.storage.begin_write()?;

        let mut order = self
            .storage
            .get_order_txn(&txn, &action.order_id)?
            .ok_or_else(|| ManagerError::OrderNotFound(action.order_id.clone()))?;

        let sequence = self.storage.increment_sequence(&txn)?;
        let event = action.execute(&order, sequence, shared::util::now_millis())?;
        let from = order.status;
        reducer::apply(&mut order, &event);

        self.storage.store_order(&txn, &order)?;
        self.storage.store_event(&txn, &event)?;
        txn.commit().map_err(crate::db::StorageError::from)?;

        tracing::info!(
            order_id = %order.id,
            action = action.name(),
            from = %from,
            to = %order.status,
            sequence,
            "Order transitioned"
        );

        Ok(order)
    }
}

fn sort_newest_first(orders: &mut [Order]) {
    orders.sort_by(|a, b| b.order_time.cmp(&a.order_time).then_with(|| a.id.cmp(&b.id)));
}

#[cfg(test)]
mod tests;
