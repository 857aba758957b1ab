//! Menu API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/menu", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id).put(handler::update))
        .route("/{id}/availability", post(handler::toggle_availability))
        .route(
            "/{id}/image",
            post(handler::upload_image).delete(handler::clear_image),
        )
}
