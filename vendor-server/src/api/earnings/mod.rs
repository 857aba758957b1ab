//! Earnings API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/earnings", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::summary))
        .route("/transactions", get(handler::transactions))
        .route("/payouts", post(handler::request_payout).get(handler::payouts))
}
