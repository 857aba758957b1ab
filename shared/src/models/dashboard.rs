//! Dashboard Model

use super::order::Order;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopDish {
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub today_orders: u32,
    pub today_earnings: Decimal,
    pub pending_orders: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_selling_dish: Option<TopDish>,
    pub recent_orders: Vec<Order>,
}
