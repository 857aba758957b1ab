//! Profile API 模块
//!
//! 资料编辑采用草稿模式：先创建草稿，逐项修改，最后保存或放弃。

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/profile", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::get))
        .route(
            "/draft",
            get(handler::get_draft)
                .post(handler::begin_edit)
                .patch(handler::edit_field)
                .delete(handler::cancel_edit),
        )
        .route("/draft/hours/{day}", put(handler::edit_hours))
        .route("/draft/save", post(handler::save))
}
