//! Onboarding API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::{CUISINE_OPTIONS, OnboardingDraft, OnboardingSubmitted, OnboardingUpdate};

/// GET /api/onboarding - 当前向导状态
pub async fn get(State(state): State<ServerState>) -> Json<OnboardingDraft> {
    Json(state.onboarding.get())
}

/// GET /api/onboarding/cuisines - 菜系选项
pub async fn cuisines() -> Json<Vec<&'static str>> {
    Json(CUISINE_OPTIONS.to_vec())
}

/// PATCH /api/onboarding - 更新表单字段
pub async fn update(
    State(state): State<ServerState>,
    Json(payload): Json<OnboardingUpdate>,
) -> AppResult<Json<OnboardingDraft>> {
    Ok(Json(state.onboarding.update(payload)?))
}

/// POST /api/onboarding/next - 校验当前步骤并前进
pub async fn next(State(state): State<ServerState>) -> AppResult<Json<OnboardingDraft>> {
    Ok(Json(state.onboarding.next()?))
}

/// POST /api/onboarding/back - 返回上一步
pub async fn back(State(state): State<ServerState>) -> AppResult<Json<OnboardingDraft>> {
    Ok(Json(state.onboarding.back()?))
}

/// POST /api/onboarding/submit - 提交入驻信息
pub async fn submit(State(state): State<ServerState>) -> AppResult<Json<OnboardingSubmitted>> {
    Ok(Json(state.onboarding.submit()?))
}
