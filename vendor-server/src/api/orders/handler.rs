//! Orders API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text};
use crate::utils::{AppError, AppResult};
use shared::models::{
    HistoryFilter, Order, OrderCounts, OrderEvent, OrderStatus, RejectOrderRequest,
};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Status tab, `pending` when absent
    pub tab: Option<String>,
}

/// GET /api/orders?tab= - 按状态列出订单
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let status = match query.tab.as_deref() {
        None | Some("") => OrderStatus::Pending,
        Some(tab) => tab
            .parse::<OrderStatus>()
            .map_err(|e| AppError::validation(e.to_string()).with_detail("tab", tab))?,
    };
    Ok(Json(state.orders.list(status)?))
}

/// GET /api/orders/counts - 各状态订单数
pub async fn counts(State(state): State<ServerState>) -> AppResult<Json<OrderCounts>> {
    Ok(Json(state.orders.counts()?))
}

/// GET /api/orders/history - 历史订单
pub async fn history(
    State(state): State<ServerState>,
    Query(filter): Query<HistoryFilter>,
) -> AppResult<Json<Vec<Order>>> {
    let now = chrono::Local::now().naive_local();
    Ok(Json(state.orders.history(&filter, now)?))
}

/// GET /api/orders/:id - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.get(&id)?))
}

/// GET /api/orders/:id/events - 订单流转记录
pub async fn events(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<OrderEvent>>> {
    Ok(Json(state.orders.events(&id)?))
}

/// POST /api/orders/:id/accept - 接单
pub async fn accept(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.accept(&id)?))
}

/// POST /api/orders/:id/reject - 拒单 (可附原因)
pub async fn reject(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Option<Json<RejectOrderRequest>>,
) -> AppResult<Json<Order>> {
    let reason = payload.and_then(|Json(p)| p.reason);
    validate_optional_text(&reason, "reason", MAX_NOTE_LEN)?;
    Ok(Json(state.orders.reject(&id, reason)?))
}

/// POST /api/orders/:id/complete - 完成订单
pub async fn complete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.complete(&id)?))
}
