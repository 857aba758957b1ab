//! Earnings Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline earnings figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsSummary {
    pub today: Decimal,
    pub weekly: Decimal,
    pub monthly: Decimal,
    pub pending_payout: Decimal,
    pub commission: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Completed,
    Pending,
}

/// One settlement day in the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub orders: u32,
    pub status: TransactionStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutStatus {
    Requested,
}

/// A vendor's request to pay out the pending amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutRequest {
    pub id: i64,
    pub amount: Decimal,
    pub status: PayoutStatus,
    /// Unix milliseconds
    pub requested_at: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionQuery {
    #[serde(default)]
    pub status: Option<TransactionStatus>,
}
