//! Profile API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{DayHoursPatch, EditFieldRequest, VendorProfile, Weekday};

/// GET /api/profile - 商家资料
pub async fn get(State(state): State<ServerState>) -> Json<VendorProfile> {
    Json(state.profile.get())
}

/// GET /api/profile/draft - 当前草稿
pub async fn get_draft(State(state): State<ServerState>) -> AppResult<Json<VendorProfile>> {
    state
        .profile
        .draft()
        .map(Json)
        .ok_or_else(|| AppError::new(ErrorCode::ProfileNotEditing))
}

/// POST /api/profile/draft - 开始编辑
pub async fn begin_edit(State(state): State<ServerState>) -> Json<VendorProfile> {
    Json(state.profile.begin_edit())
}

/// PATCH /api/profile/draft - 修改草稿字段
pub async fn edit_field(
    State(state): State<ServerState>,
    Json(payload): Json<EditFieldRequest>,
) -> AppResult<Json<VendorProfile>> {
    Ok(Json(state.profile.edit_field(&payload.field, payload.value)?))
}

/// PUT /api/profile/draft/hours/:day - 修改某天营业时间
pub async fn edit_hours(
    State(state): State<ServerState>,
    Path(day): Path<String>,
    Json(patch): Json<DayHoursPatch>,
) -> AppResult<Json<VendorProfile>> {
    let day: Weekday = day.parse()?;
    Ok(Json(state.profile.edit_hours(day, patch)?))
}

/// DELETE /api/profile/draft - 放弃草稿
pub async fn cancel_edit(State(state): State<ServerState>) -> AppResult<Json<VendorProfile>> {
    Ok(Json(state.profile.cancel_edit()?))
}

/// POST /api/profile/draft/save - 校验并保存草稿
pub async fn save(State(state): State<ServerState>) -> AppResult<Json<VendorProfile>> {
    Ok(Json(state.profile.save()?))
}
