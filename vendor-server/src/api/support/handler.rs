//! Support API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::{
    FaqEntry, SendMessageRequest, SendMessageResponse, SupportContact, SupportMessage,
};

/// GET /api/support/messages - 聊天记录
pub async fn messages(State(state): State<ServerState>) -> Json<Vec<SupportMessage>> {
    Json(state.support.messages())
}

/// POST /api/support/messages - 发送消息 (含自动回复)
pub async fn send(
    State(state): State<ServerState>,
    Json(payload): Json<SendMessageRequest>,
) -> AppResult<Json<SendMessageResponse>> {
    Ok(Json(state.support.send(&payload.text)?))
}

/// GET /api/support/faq - 常见问题
pub async fn faq(State(state): State<ServerState>) -> Json<Vec<FaqEntry>> {
    Json(state.support.faq())
}

/// GET /api/support/contact - 客服联系方式
pub async fn contact(State(state): State<ServerState>) -> Json<SupportContact> {
    Json(state.support.contact())
}
