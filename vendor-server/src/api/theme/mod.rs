//! Theme API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/theme", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::get))
        .route("/colors", put(handler::apply))
        .route("/colors/{key}", put(handler::set_color))
        .route("/mode", put(handler::set_mode))
        .route("/reset", post(handler::reset))
        .route("/css", get(handler::css))
}
