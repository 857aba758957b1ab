//! Order Model

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order status
///
/// `Cancelled` only appears on archived records; vendor actions never produce it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Accepted,
        OrderStatus::Rejected,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// No vendor action can move an order out of a terminal status
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Completed | Self::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized status / tab name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct UnknownOrderStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownOrderStatus(s.to_string()))
    }
}

/// Customer snapshot on an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub phone: String,
}

/// Order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    /// Unit price
    pub price: Decimal,
}

impl OrderItem {
    pub fn new(name: impl Into<String>, quantity: u32, price: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }

    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Customer order as seen by the vendor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    /// Always `Σ price × quantity` of `items`
    pub total: Decimal,
    pub status: OrderStatus,
    /// Local kitchen time, `YYYY-MM-DDTHH:MM:SS`
    pub order_time: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

impl Order {
    /// Build an order; the total is derived from the items.
    pub fn new(
        id: impl Into<String>,
        customer: Customer,
        items: Vec<OrderItem>,
        status: OrderStatus,
        order_time: NaiveDateTime,
    ) -> Self {
        let total = Self::compute_total(&items);
        Self {
            id: id.into(),
            customer,
            items,
            total,
            status,
            order_time,
            special_instructions: None,
            delivery_address: None,
            payment_method: None,
        }
    }

    pub fn with_special_instructions(mut self, text: impl Into<String>) -> Self {
        self.special_instructions = Some(text.into());
        self
    }

    pub fn with_delivery(
        mut self,
        address: impl Into<String>,
        payment_method: impl Into<String>,
    ) -> Self {
        self.delivery_address = Some(address.into());
        self.payment_method = Some(payment_method.into());
        self
    }

    pub fn compute_total(items: &[OrderItem]) -> Decimal {
        items.iter().map(OrderItem::line_total).sum()
    }
}

/// Per-status order counts (tab badges)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCounts {
    pub pending: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl OrderCounts {
    pub fn from_orders<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        let mut counts = Self::default();
        for order in orders {
            match order.status {
                OrderStatus::Pending => counts.pending += 1,
                OrderStatus::Accepted => counts.accepted += 1,
                OrderStatus::Rejected => counts.rejected += 1,
                OrderStatus::Completed => counts.completed += 1,
                OrderStatus::Cancelled => counts.cancelled += 1,
            }
        }
        counts
    }

    pub fn get(&self, status: OrderStatus) -> usize {
        match status {
            OrderStatus::Pending => self.pending,
            OrderStatus::Accepted => self.accepted,
            OrderStatus::Rejected => self.rejected,
            OrderStatus::Completed => self.completed,
            OrderStatus::Cancelled => self.cancelled,
        }
    }
}

// ============================================================================
// Events
// ============================================================================

/// Vendor action recorded against an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OrderEventKind {
    Accepted,
    Rejected {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
    Completed,
}

impl OrderEventKind {
    /// Status the order must be in for this action
    pub fn source_status(&self) -> OrderStatus {
        match self {
            Self::Accepted | Self::Rejected { .. } => OrderStatus::Pending,
            Self::Completed => OrderStatus::Accepted,
        }
    }

    /// Status the order ends in
    pub fn target_status(&self) -> OrderStatus {
        match self {
            Self::Accepted => OrderStatus::Accepted,
            Self::Rejected { .. } => OrderStatus::Rejected,
            Self::Completed => OrderStatus::Completed,
        }
    }
}

/// Order event - immutable audit record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEvent {
    /// Global sequence number
    pub sequence: u64,
    pub order_id: String,
    #[serde(flatten)]
    pub kind: OrderEventKind,
    /// Server timestamp (Unix milliseconds)
    pub timestamp: i64,
}

/// Reject payload; the reason is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RejectOrderRequest {
    #[serde(default)]
    pub reason: Option<String>,
}

// ============================================================================
// History filter
// ============================================================================

/// Date window for the history page, relative to "now"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRange {
    #[default]
    All,
    Today,
    /// Since Sunday 00:00 of the current week
    Week,
    /// Since the first of the current month
    Month,
}

impl DateRange {
    /// Inclusive lower bound of the window; `None` for `All`
    pub fn start(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        let today = now.date();
        let day: NaiveDate = match self {
            Self::All => return None,
            Self::Today => today,
            Self::Week => today - Duration::days(i64::from(today.weekday().num_days_from_sunday())),
            Self::Month => today.with_day(1)?,
        };
        Some(day.and_time(NaiveTime::MIN))
    }
}

/// Status filter for the history page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryStatus {
    #[default]
    All,
    Completed,
    Rejected,
    Cancelled,
}

impl HistoryStatus {
    pub fn matches(&self, status: OrderStatus) -> bool {
        match self {
            Self::All => true,
            Self::Completed => status == OrderStatus::Completed,
            Self::Rejected => status == OrderStatus::Rejected,
            Self::Cancelled => status == OrderStatus::Cancelled,
        }
    }
}

/// Order history query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryFilter {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub date: DateRange,
    #[serde(default)]
    pub status: HistoryStatus,
}

impl HistoryFilter {
    /// Id and name match case-insensitively; phone is a plain substring match.
    pub fn matches(&self, order: &Order, now: NaiveDateTime) -> bool {
        if let Some(term) = self.search.as_deref().filter(|t| !t.is_empty()) {
            let needle = term.to_lowercase();
            let hit = order.id.to_lowercase().contains(&needle)
                || order.customer.name.to_lowercase().contains(&needle)
                || order.customer.phone.contains(term);
            if !hit {
                return false;
            }
        }

        if let Some(start) = self.date.start(now) {
            if order.order_time < start {
                return false;
            }
        }

        self.status.matches(order.status)
    }
}
