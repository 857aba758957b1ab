//! Onboarding API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/onboarding", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::get).patch(handler::update))
        .route("/cuisines", get(handler::cuisines))
        .route("/next", post(handler::next))
        .route("/back", post(handler::back))
        .route("/submit", post(handler::submit))
}
