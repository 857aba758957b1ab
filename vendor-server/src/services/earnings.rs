//! Earnings Service - read-only ledger plus payout requests

use crate::utils::{AppError, AppResult, ErrorCode};
use parking_lot::RwLock;
use rust_decimal::Decimal;
use shared::models::{
    EarningsSummary, PayoutRequest, PayoutStatus, Transaction, TransactionStatus,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct EarningsService {
    summary: Arc<EarningsSummary>,
    /// Sorted newest first
    transactions: Arc<Vec<Transaction>>,
    payouts: Arc<RwLock<Vec<PayoutRequest>>>,
}

impl std::fmt::Debug for EarningsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EarningsService")
            .field("transactions", &self.transactions.len())
            .field("payouts", &self.payouts.read().len())
            .finish()
    }
}

impl EarningsService {
    pub fn new(summary: EarningsSummary, mut transactions: Vec<Transaction>) -> Self {
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
        Self {
            summary: Arc::new(summary),
            transactions: Arc::new(transactions),
            payouts: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn summary(&self) -> EarningsSummary {
        (*self.summary).clone()
    }

    /// Ledger newest first, optionally filtered by status
    pub fn transactions(&self, status: Option<TransactionStatus>) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|t| status.is_none_or(|s| t.status == s))
            .cloned()
            .collect()
    }

    /// Most recent ledger day
    pub fn latest(&self) -> Option<Transaction> {
        self.transactions.first().cloned()
    }

    pub fn payouts(&self) -> Vec<PayoutRequest> {
        self.payouts.read().clone()
    }

    /// Request a payout of the current pending amount
    pub fn request_payout(&self) -> AppResult<PayoutRequest> {
        let amount = self.summary.pending_payout;
        if amount <= Decimal::ZERO {
            return Err(AppError::new(ErrorCode::PayoutNothingPending));
        }

        let mut payouts = self.payouts.write();
        if let Some(open) = payouts.iter().find(|p| p.status == PayoutStatus::Requested) {
            return Err(AppError::new(ErrorCode::PayoutAlreadyRequested)
                .with_detail("payout_id", open.id));
        }

        let request = PayoutRequest {
            id: shared::util::snowflake_id(),
            amount,
            status: PayoutStatus::Requested,
            requested_at: shared::util::now_millis(),
        };
        payouts.push(request.clone());

        tracing::info!(payout_id = request.id, amount = %amount, "Payout requested");
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use rust_decimal_macros::dec;

    fn service() -> EarningsService {
        EarningsService::new(seed::earnings_summary(), seed::transactions())
    }

    #[test]
    fn test_transactions_filter() {
        let earnings = service();
        assert_eq!(earnings.transactions(None).len(), 5);

        let pending = earnings.transactions(Some(TransactionStatus::Pending));
        let ids: Vec<_> = pending.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["TRX001", "TRX002", "TRX003"]);

        let completed = earnings.transactions(Some(TransactionStatus::Completed));
        assert_eq!(completed.len(), 2);
    }

    #[test]
    fn test_latest_is_newest_day() {
        let latest = service().latest().unwrap();
        assert_eq!(latest.id, "TRX001");
        assert_eq!(latest.orders, 12);
        assert_eq!(latest.amount, dec!(2450));
    }

    #[test]
    fn test_payout_once() {
        let earnings = service();
        let request = earnings.request_payout().unwrap();
        assert_eq!(request.amount, dec!(12540));

        let err = earnings.request_payout().unwrap_err();
        assert_eq!(err.code, ErrorCode::PayoutAlreadyRequested);
        assert_eq!(earnings.payouts().len(), 1);
        // ledger figures are display values
        assert_eq!(earnings.summary(), seed::earnings_summary());
    }

    #[test]
    fn test_payout_nothing_pending() {
        let mut summary = seed::earnings_summary();
        summary.pending_payout = Decimal::ZERO;
        let earnings = EarningsService::new(summary, Vec::new());

        let err = earnings.request_payout().unwrap_err();
        assert_eq!(err.code, ErrorCode::PayoutNothingPending);
    }
}
