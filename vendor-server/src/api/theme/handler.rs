//! Theme API Handlers

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use http::header;

use crate::core::ServerState;
use crate::theme::ThemeError;
use crate::utils::AppResult;
use shared::models::{ColorKey, SetColorRequest, SetModeRequest, ThemeColors, ThemeState};

/// GET /api/theme - 当前配色与模式
pub async fn get(State(state): State<ServerState>) -> Json<ThemeState> {
    Json(state.theme.state())
}

/// PUT /api/theme/colors - 一次应用全部颜色
pub async fn apply(
    State(state): State<ServerState>,
    Json(colors): Json<ThemeColors>,
) -> AppResult<Json<ThemeState>> {
    Ok(Json(state.theme.apply(colors)?))
}

/// PUT /api/theme/colors/:key - 修改单个颜色
pub async fn set_color(
    State(state): State<ServerState>,
    Path(key): Path<String>,
    Json(payload): Json<SetColorRequest>,
) -> AppResult<Json<ThemeState>> {
    let key: ColorKey = key.parse().map_err(ThemeError::from)?;
    Ok(Json(state.theme.set_color(key, &payload.value)?))
}

/// PUT /api/theme/mode - 切换明暗模式 (同时重置为该模式默认配色)
pub async fn set_mode(
    State(state): State<ServerState>,
    Json(payload): Json<SetModeRequest>,
) -> AppResult<Json<ThemeState>> {
    Ok(Json(state.theme.set_mode(payload.mode)?))
}

/// POST /api/theme/reset - 恢复当前模式默认配色
pub async fn reset(State(state): State<ServerState>) -> AppResult<Json<ThemeState>> {
    Ok(Json(state.theme.reset()?))
}

/// GET /api/theme/css - CSS 变量样式表
pub async fn css(State(state): State<ServerState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        state.theme.css(),
    )
}
