//! 健康检查路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 简单健康检查 |
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "status": "ok",
//!   "version": "0.1.0",
//!   "environment": "development",
//!   "pending_orders": 1
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// 健康检查路由
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// 简单健康检查响应
#[derive(Serialize)]
pub struct HealthResponse {
    /// 状态 (ok | degraded)
    status: &'static str,
    /// 版本号
    version: &'static str,
    environment: String,
    /// 订单存储可读时返回待处理订单数
    #[serde(skip_serializing_if = "Option::is_none")]
    pending_orders: Option<usize>,
}

/// GET /health - 健康检查
async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let pending_orders = match state.orders.counts() {
        Ok(counts) => Some(counts.pending),
        Err(e) => {
            tracing::warn!(error = %e, "Health check: order storage unavailable");
            None
        }
    };

    Json(HealthResponse {
        status: if pending_orders.is_some() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        pending_orders,
    })
}
