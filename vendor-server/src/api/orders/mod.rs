//! Orders API 模块
//!
//! 订单看板、状态流转与历史查询

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/counts", get(handler::counts))
        .route("/history", get(handler::history))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/events", get(handler::events))
        .route("/{id}/accept", post(handler::accept))
        .route("/{id}/reject", post(handler::reject))
        .route("/{id}/complete", post(handler::complete))
}
