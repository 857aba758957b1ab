//! Earnings API Handlers

use axum::{
    Json,
    extract::{Query, State},
};

use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::{EarningsSummary, PayoutRequest, Transaction, TransactionQuery};

/// GET /api/earnings - 收益概览
pub async fn summary(State(state): State<ServerState>) -> Json<EarningsSummary> {
    Json(state.earnings.summary())
}

/// GET /api/earnings/transactions?status= - 账单明细
pub async fn transactions(
    State(state): State<ServerState>,
    Query(query): Query<TransactionQuery>,
) -> Json<Vec<Transaction>> {
    Json(state.earnings.transactions(query.status))
}

/// POST /api/earnings/payouts - 申请提现
pub async fn request_payout(State(state): State<ServerState>) -> AppResult<Json<PayoutRequest>> {
    Ok(Json(state.earnings.request_payout()?))
}

/// GET /api/earnings/payouts - 提现申请记录
pub async fn payouts(State(state): State<ServerState>) -> Json<Vec<PayoutRequest>> {
    Json(state.earnings.payouts())
}
