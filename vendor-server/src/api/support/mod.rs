//! Support API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/support", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/messages", get(handler::messages).post(handler::send))
        .route("/faq", get(handler::faq))
        .route("/contact", get(handler::contact))
}
