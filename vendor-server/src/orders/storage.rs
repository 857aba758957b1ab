//! redb-based storage for vendor orders
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `orders` | `order_id` | `Order` | Live order snapshots |
//! | `order_events` | `(order_id, sequence)` | `OrderEvent` | Transition log (append-only) |
//! | `order_history` | `order_id` | `Order` | Archived orders |
//! | `order_sequence` | `"seq"` | `u64` | Global event sequence |

use crate::db::StorageResult;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition, WriteTransaction};
use shared::models::{Order, OrderEvent};
use std::sync::Arc;

/// Live orders: key = order_id, value = JSON-serialized Order
const ORDERS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("orders");

/// Events: key = (order_id, sequence), value = JSON-serialized OrderEvent
const EVENTS_TABLE: TableDefinition<(&str, u64), &[u8]> = TableDefinition::new("order_events");

/// Archived orders: key = order_id, value = JSON-serialized Order
const HISTORY_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("order_history");

/// Sequence counter: key = "seq", value = u64
const SEQUENCE_TABLE: TableDefinition<&str, u64> = TableDefinition::new("order_sequence");

const SEQUENCE_KEY: &str = "seq";

/// Order storage backed by redb
#[derive(Clone)]
pub struct OrderStorage {
    db: Arc<Database>,
}

impl std::fmt::Debug for OrderStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderStorage").finish_non_exhaustive()
    }
}

impl OrderStorage {
    /// Wrap an open database and create the order tables if missing
    pub fn new(db: Arc<Database>) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(ORDERS_TABLE)?;
            let _ = write_txn.open_table(EVENTS_TABLE)?;
            let _ = write_txn.open_table(HISTORY_TABLE)?;

            let mut seq_table = write_txn.open_table(SEQUENCE_TABLE)?;
            if seq_table.get(SEQUENCE_KEY)?.is_none() {
                seq_table.insert(SEQUENCE_KEY, 0u64)?;
            }
        }
        write_txn.commit()?;

        Ok(Self { db })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        Self::new(crate::db::open_in_memory()?)
    }

    /// Begin a write transaction
    pub fn begin_write(&self) -> StorageResult<WriteTransaction> {
        Ok(self.db.begin_write()?)
    }

    // ========== Sequence ==========

    /// Increment and return the sequence number
    pub fn increment_sequence(&self, txn: &WriteTransaction) -> StorageResult<u64> {
        let mut table = txn.open_table(SEQUENCE_TABLE)?;
        let current = table
            .get(SEQUENCE_KEY)?
            .map(|guard| guard.value())
            .unwrap_or(0);
        let next = current + 1;
        table.insert(SEQUENCE_KEY, next)?;
        Ok(next)
    }

    // ========== Live orders ==========

    /// Store an order snapshot (within transaction)
    pub fn store_order(&self, txn: &WriteTransaction, order: &Order) -> StorageResult<()> {
        let mut table = txn.open_table(ORDERS_TABLE)?;
        let value = serde_json::to_vec(order)?;
        table.insert(order.id.as_str(), value.as_slice())?;
        Ok(())
    }

    /// Get an order by ID
    pub fn get_order(&self, order_id: &str) -> StorageResult<Option<Order>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;

        match table.get(order_id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Get an order by ID (within transaction)
    pub fn get_order_txn(
        &self,
        txn: &WriteTransaction,
        order_id: &str,
    ) -> StorageResult<Option<Order>> {
        let table = txn.open_table(ORDERS_TABLE)?;

        match table.get(order_id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Get all live orders
    pub fn get_all_orders(&self) -> StorageResult<Vec<Order>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;

        let mut orders = Vec::new();
        for result in table.iter()? {
            let (_key, value) = result?;
            orders.push(serde_json::from_slice(value.value())?);
        }
        Ok(orders)
    }

    /// Whether any live or archived order exists
    pub fn is_empty(&self) -> StorageResult<bool> {
        let read_txn = self.db.begin_read()?;
        let orders = read_txn.open_table(ORDERS_TABLE)?;
        let history = read_txn.open_table(HISTORY_TABLE)?;
        Ok(orders.first()?.is_none() && history.first()?.is_none())
    }

    // ========== Events ==========

    /// Store an event (within transaction)
    pub fn store_event(&self, txn: &WriteTransaction, event: &OrderEvent) -> StorageResult<()> {
        let mut table = txn.open_table(EVENTS_TABLE)?;
        let key = (event.order_id.as_str(), event.sequence);
        let value = serde_json::to_vec(event)?;
        table.insert(key, value.as_slice())?;
        Ok(())
    }

    /// Get all events for an order
    pub fn get_events_for_order(&self, order_id: &str) -> StorageResult<Vec<OrderEvent>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(EVENTS_TABLE)?;

        let mut events = Vec::new();
        for result in table.range((order_id, 0u64)..=(order_id, u64::MAX))? {
            let (_key, value) = result?;
            let event: OrderEvent = serde_json::from_slice(value.value())?;
            events.push(event);
        }

        events.sort_by_key(|e| e.sequence);
        Ok(events)
    }

    // ========== History ==========

    /// Store an archived order (within transaction)
    pub fn store_archived(&self, txn: &WriteTransaction, order: &Order) -> StorageResult<()> {
        let mut table = txn.open_table(HISTORY_TABLE)?;
        let value = serde_json::to_vec(order)?;
        table.insert(order.id.as_str(), value.as_slice())?;
        Ok(())
    }

    /// Get all archived orders
    pub fn get_archived_orders(&self) -> StorageResult<Vec<Order>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(HISTORY_TABLE)?;

        let mut orders = Vec::new();
        for result in table.iter()? {
            let (_key, value) = result?;
            orders.push(serde_json::from_slice(value.value())?);
        }
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use shared::models::{Customer, OrderEventKind, OrderItem, OrderStatus};

    fn order(id: &str, status: OrderStatus) -> Order {
        let time = NaiveDate::from_ymd_opt(2023, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Order::new(
            id,
            Customer {
                name: "Test".into(),
                phone: "9000000000".into(),
            },
            vec![OrderItem::new("Chai", 2, dec!(20))],
            status,
            time,
        )
    }

    #[test]
    fn test_store_and_get_order() {
        let storage = OrderStorage::open_in_memory().unwrap();
        assert!(storage.is_empty().unwrap());

        let txn = storage.begin_write().unwrap();
        storage
            .store_order(&txn, &order("A", OrderStatus::Pending))
            .unwrap();
        txn.commit().unwrap();

        let loaded = storage.get_order("A").unwrap().unwrap();
        assert_eq!(loaded.total, dec!(40));
        assert!(storage.get_order("B").unwrap().is_none());
        assert!(!storage.is_empty().unwrap());
    }

    #[test]
    fn test_events_are_scoped_and_ordered() {
        let storage = OrderStorage::open_in_memory().unwrap();

        let txn = storage.begin_write().unwrap();
        for (order_id, kind) in [
            ("A", OrderEventKind::Accepted),
            ("B", OrderEventKind::Rejected { reason: None }),
            ("A", OrderEventKind::Completed),
        ] {
            let sequence = storage.increment_sequence(&txn).unwrap();
            let event = OrderEvent {
                sequence,
                order_id: order_id.into(),
                kind,
                timestamp: 0,
            };
            storage.store_event(&txn, &event).unwrap();
        }
        txn.commit().unwrap();

        let events = storage.get_events_for_order("A").unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, OrderEventKind::Accepted);
        assert_eq!(events[1].sequence, 3);
    }

    #[test]
    fn test_uncommitted_writes_are_discarded() {
        let storage = OrderStorage::open_in_memory().unwrap();

        let txn = storage.begin_write().unwrap();
        storage
            .store_order(&txn, &order("A", OrderStatus::Pending))
            .unwrap();
        txn.abort().unwrap();

        assert!(storage.get_order("A").unwrap().is_none());
    }

    #[test]
    fn test_archive_is_separate_from_live_orders() {
        let storage = OrderStorage::open_in_memory().unwrap();

        let txn = storage.begin_write().unwrap();
        storage
            .store_archived(&txn, &order("ORD001", OrderStatus::Cancelled))
            .unwrap();
        txn.commit().unwrap();

        assert!(storage.get_all_orders().unwrap().is_empty());
        assert_eq!(storage.get_archived_orders().unwrap().len(), 1);
        assert!(!storage.is_empty().unwrap());
    }
}
