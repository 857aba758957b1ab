//! Dashboard Service - headline numbers for the landing page

use super::earnings::EarningsService;
use crate::orders::OrdersManager;
use crate::utils::AppResult;
use rust_decimal::Decimal;
use shared::models::{DashboardStats, Order, OrderStatus, TopDish};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Number of orders in the "recent orders" card
pub const RECENT_ORDERS: usize = 3;

/// Highest quantity across non-rejected orders; ties go to the first name alphabetically
pub fn top_selling_dish(orders: &[Order]) -> Option<TopDish> {
    let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
    for order in orders.iter().filter(|o| o.status != OrderStatus::Rejected) {
        for item in &order.items {
            *counts.entry(item.name.as_str()).or_default() += item.quantity;
        }
    }

    let mut best: Option<(&str, u32)> = None;
    for (name, count) in counts {
        if best.is_none_or(|(_, c)| count > c) {
            best = Some((name, count));
        }
    }
    best.map(|(name, count)| TopDish {
        name: name.to_string(),
        count,
    })
}

#[derive(Clone)]
pub struct DashboardService {
    orders: Arc<OrdersManager>,
    earnings: EarningsService,
}

impl std::fmt::Debug for DashboardService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardService").finish_non_exhaustive()
    }
}

impl DashboardService {
    pub fn new(orders: Arc<OrdersManager>, earnings: EarningsService) -> Self {
        Self { orders, earnings }
    }

    pub fn stats(&self) -> AppResult<DashboardStats> {
        let (today_orders, today_earnings) = self
            .earnings
            .latest()
            .map(|t| (t.orders, t.amount))
            .unwrap_or((0, Decimal::ZERO));

        let live = self.orders.all()?;
        let pending_orders = live
            .iter()
            .filter(|o| o.status == OrderStatus::Pending)
            .count();

        Ok(DashboardStats {
            today_orders,
            today_earnings,
            pending_orders,
            top_selling_dish: top_selling_dish(&live),
            recent_orders: self.orders.recent(RECENT_ORDERS)?,
        })
    }
}
