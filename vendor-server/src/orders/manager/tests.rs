use super::*;
use crate::seed;
use shared::error::{AppError, ErrorCode};
use shared::models::{DateRange, HistoryStatus, OrderEventKind};

fn create_test_manager() -> OrdersManager {
    let storage = OrderStorage::open_in_memory().unwrap();
    let manager = OrdersManager::with_storage(storage);
    manager
        .seed(&seed::live_orders(), &seed::archived_orders())
        .unwrap();
    manager
}

fn ids(orders: &[Order]) -> Vec<&str> {
    orders.iter().map(|o| o.id.as_str()).collect()
}

fn at(value: &str) -> NaiveDateTime {
    value.parse().unwrap()
}

// ========================================================================
// Listing
// ========================================================================

#[test]
fn test_list_returns_exactly_matching_status() {
    let manager = create_test_manager();

    for status in OrderStatus::ALL {
        let orders = manager.list(status).unwrap();
        assert!(orders.iter().all(|o| o.status == status));
    }
    assert_eq!(ids(&manager.list(OrderStatus::Pending).unwrap()), vec!["ORD2023001"]);
    assert_eq!(ids(&manager.list(OrderStatus::Accepted).unwrap()), vec!["ORD2023002"]);
    assert!(manager.list(OrderStatus::Cancelled).unwrap().is_empty());
}

#[test]
fn test_list_is_newest_first() {
    let manager = create_test_manager();
    manager.accept("ORD2023001").unwrap();

    let accepted = manager.list(OrderStatus::Accepted).unwrap();
    assert_eq!(ids(&accepted), vec!["ORD2023001", "ORD2023002"]);
}

#[test]
fn test_counts() {
    let manager = create_test_manager();
    let counts = manager.counts().unwrap();
    assert_eq!(counts.pending, 1);
    assert_eq!(counts.accepted, 1);
    assert_eq!(counts.completed, 1);
    assert_eq!(counts.rejected, 1);
    assert_eq!(counts.cancelled, 0);
}

#[test]
fn test_seed_only_once() {
    let manager = create_test_manager();
    manager.accept("ORD2023001").unwrap();

    let seeded = manager
        .seed(&seed::live_orders(), &seed::archived_orders())
        .unwrap();
    assert!(!seeded);
    assert_eq!(
        manager.get("ORD2023001").unwrap().status,
        OrderStatus::Accepted
    );
}

#[test]
fn test_recent() {
    let manager = create_test_manager();
    let recent = manager.recent(3).unwrap();
    assert_eq!(ids(&recent), vec!["ORD2023001", "ORD2023002", "ORD2023003"]);
}

// ========================================================================
// Transitions
// ========================================================================

#[test]
fn test_accept_then_complete() {
    let manager = create_test_manager();

    let order = manager.accept("ORD2023001").unwrap();
    assert_eq!(order.status, OrderStatus::Accepted);

    let order = manager.complete("ORD2023001").unwrap();
    assert_eq!(order.status, OrderStatus::Completed);
    assert_eq!(
        manager.get("ORD2023001").unwrap().status,
        OrderStatus::Completed
    );

    let events = manager.events("ORD2023001").unwrap();
    assert_eq!(events.len(), 2);
    assert!(events[0].sequence < events[1].sequence);
    assert_eq!(events[0].kind, OrderEventKind::Accepted);
    assert_eq!(events[1].kind, OrderEventKind::Completed);
}

#[test]
fn test_reject_keeps_reason_off_the_order() {
    let manager = create_test_manager();
    let before = manager.get("ORD2023001").unwrap();

    let order = manager
        .reject("ORD2023001", Some("Out of ingredients".to_string()))
        .unwrap();
    assert_eq!(order.status, OrderStatus::Rejected);

    let stored = manager.get("ORD2023001").unwrap();
    assert_eq!(stored.status, OrderStatus::Rejected);
    assert_eq!(stored.special_instructions, before.special_instructions);
    let json = serde_json::to_string(&stored).unwrap();
    assert!(!json.contains("Out of ingredients"));

    let events = manager.events("ORD2023001").unwrap();
    assert_eq!(
        events[0].kind,
        OrderEventKind::Rejected {
            reason: Some("Out of ingredients".to_string())
        }
    );
}

#[test]
fn test_invalid_transition_leaves_order_unchanged() {
    let manager = create_test_manager();

    // completed order cannot be accepted
    let err = manager.accept("ORD2023003").unwrap_err();
    assert!(matches!(err, ManagerError::InvalidTransition { .. }));

    // pending order cannot be completed
    let err = manager.complete("ORD2023001").unwrap_err();
    let app: AppError = err.into();
    assert_eq!(app.code, ErrorCode::OrderInvalidTransition);
    assert_eq!(app.http_status(), http::StatusCode::CONFLICT);

    assert_eq!(
        manager.get("ORD2023003").unwrap().status,
        OrderStatus::Completed
    );
    assert_eq!(
        manager.get("ORD2023001").unwrap().status,
        OrderStatus::Pending
    );
    assert!(manager.events("ORD2023001").unwrap().is_empty());
}

#[test]
fn test_double_accept_rejected() {
    let manager = create_test_manager();
    manager.accept("ORD2023001").unwrap();
    let err = manager.accept("ORD2023001").unwrap_err();
    assert!(matches!(
        err,
        ManagerError::InvalidTransition {
            status: OrderStatus::Accepted,
            action: "accept",
            ..
        }
    ));
    assert_eq!(manager.events("ORD2023001").unwrap().len(), 1);
}

#[test]
fn test_unknown_order() {
    let manager = create_test_manager();

    let err = manager.accept("ORD9999").unwrap_err();
    assert!(matches!(err, ManagerError::OrderNotFound(ref id) if id == "ORD9999"));
    let app: AppError = err.into();
    assert_eq!(app.code, ErrorCode::OrderNotFound);
    assert_eq!(app.http_status(), http::StatusCode::NOT_FOUND);

    assert!(matches!(
        manager.get("ORD9999"),
        Err(ManagerError::OrderNotFound(_))
    ));
    assert!(matches!(
        manager.events("ORD9999"),
        Err(ManagerError::OrderNotFound(_))
    ));
}

// ========================================================================
// History
// ========================================================================

#[test]
fn test_history_includes_archive_and_terminal_live_orders() {
    let manager = create_test_manager();
    let now = at("2023-06-15T18:00:00");

    let all = manager.history(&HistoryFilter::default(), now).unwrap();
    assert_eq!(
        ids(&all),
        vec![
            "ORD2023003",
            "ORD2023004",
            "ORD001",
            "ORD002",
            "ORD003",
            "ORD004",
            "ORD005"
        ]
    );
}

#[test]
fn test_history_search() {
    let manager = create_test_manager();
    let now = at("2023-06-15T18:00:00");

    let filter = HistoryFilter {
        search: Some("priya".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&manager.history(&filter, now).unwrap()), vec!["ORD002"]);

    let filter = HistoryFilter {
        search: Some("9876543214".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&manager.history(&filter, now).unwrap()), vec!["ORD005"]);

    let filter = HistoryFilter {
        search: Some("ord00".to_string()),
        ..Default::default()
    };
    assert_eq!(manager.history(&filter, now).unwrap().len(), 5);
}

#[test]
fn test_history_date_and_status() {
    let manager = create_test_manager();
    // Thursday; the week started on Sunday 2023-06-11
    let now = at("2023-06-15T18:00:00");

    let today = HistoryFilter {
        date: DateRange::Today,
        ..Default::default()
    };
    assert_eq!(
        ids(&manager.history(&today, now).unwrap()),
        vec!["ORD2023003", "ORD2023004", "ORD001"]
    );

    let week_completed = HistoryFilter {
        date: DateRange::Week,
        status: HistoryStatus::Completed,
        ..Default::default()
    };
    assert_eq!(
        ids(&manager.history(&week_completed, now).unwrap()),
        vec!["ORD2023003", "ORD001", "ORD002", "ORD004"]
    );

    let cancelled = HistoryFilter {
        status: HistoryStatus::Cancelled,
        ..Default::default()
    };
    assert_eq!(ids(&manager.history(&cancelled, now).unwrap()), vec!["ORD005"]);

    let later = at("2023-07-02T09:00:00");
    let month = HistoryFilter {
        date: DateRange::Month,
        ..Default::default()
    };
    assert!(manager.history(&month, later).unwrap().is_empty());
}
