//! Dashboard API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::DashboardStats;

/// GET /api/dashboard - 首页统计
pub async fn stats(State(state): State<ServerState>) -> AppResult<Json<DashboardStats>> {
    Ok(Json(state.dashboard.stats()?))
}
