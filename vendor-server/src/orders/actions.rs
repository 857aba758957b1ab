//! Vendor actions on a single order
//!
//! An action checks the order's current status and, if allowed, produces the
//! event that records it. It never mutates the order; see [`super::reducer`].

use super::manager::ManagerError;
use shared::models::{Order, OrderEvent, OrderEventKind};

/// Accept / reject / complete a single order
#[derive(Debug, Clone)]
pub struct TransitionAction {
    pub order_id: String,
    pub kind: OrderEventKind,
}

impl TransitionAction {
    pub fn accept(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            kind: OrderEventKind::Accepted,
        }
    }

    pub fn reject(order_id: impl Into<String>, reason: Option<String>) -> Self {
        // Blank reasons are treated as absent
        let reason = reason
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());
        Self {
            order_id: order_id.into(),
            kind: OrderEventKind::Rejected { reason },
        }
    }

    pub fn complete(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            kind: OrderEventKind::Completed,
        }
    }

    /// Short action name for logs and errors
    pub fn name(&self) -> &'static str {
        match self.kind {
            OrderEventKind::Accepted => "accept",
            OrderEventKind::Rejected { .. } => "reject",
            OrderEventKind::Completed => "complete",
        }
    }

    /// Validate against the current snapshot and build the event
    pub fn execute(
        &self,
        order: &Order,
        sequence: u64,
        timestamp: i64,
    ) -> Result<OrderEvent, ManagerError> {
        let required = self.kind.source_status();
        if order.status != required {
            return Err(ManagerError::InvalidTransition {
                order_id: order.id.clone(),
                status: order.status,
                action: self.name(),
            });
        }

        Ok(OrderEvent {
            sequence,
            order_id: order.id.clone(),
            kind: self.kind.clone(),
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use shared::models::{Customer, OrderItem, OrderStatus};

    fn order(status: OrderStatus) -> Order {
        Order::new(
            "ORD1",
            Customer {
                name: "Test".into(),
                phone: "9000000000".into(),
            },
            vec![OrderItem::new("Samosa", 4, dec!(30))],
            status,
            NaiveDate::from_ymd_opt(2023, 6, 15)
                .unwrap()
                .and_hms_opt(11, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_accept_requires_pending() {
        let event = TransitionAction::accept("ORD1")
            .execute(&order(OrderStatus::Pending), 7, 100)
            .unwrap();
        assert_eq!(event.sequence, 7);
        assert_eq!(event.kind, OrderEventKind::Accepted);

        for status in [
            OrderStatus::Accepted,
            OrderStatus::Rejected,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ] {
            let err = TransitionAction::accept("ORD1")
                .execute(&order(status), 1, 0)
                .unwrap_err();
            assert!(matches!(err, ManagerError::InvalidTransition { .. }));
        }
    }

    #[test]
    fn test_complete_requires_accepted() {
        assert!(
            TransitionAction::complete("ORD1")
                .execute(&order(OrderStatus::Accepted), 1, 0)
                .is_ok()
        );
        assert!(
            TransitionAction::complete("ORD1")
                .execute(&order(OrderStatus::Pending), 1, 0)
                .is_err()
        );
    }

    #[test]
    fn test_blank_reject_reason_is_dropped() {
        let action = TransitionAction::reject("ORD1", Some("   ".into()));
        assert_eq!(action.kind, OrderEventKind::Rejected { reason: None });

        let action = TransitionAction::reject("ORD1", Some(" Kitchen closed ".into()));
        assert_eq!(
            action.kind,
            OrderEventKind::Rejected {
                reason: Some("Kitchen closed".into())
            }
        );
    }
}
