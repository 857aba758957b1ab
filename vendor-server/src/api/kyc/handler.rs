//! KYC API Handlers

use axum::{
    Json,
    extract::{Multipart, State},
};

use crate::api::uploads::read_files;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::KycState;

/// GET /api/kyc - KYC 状态
pub async fn status(State(state): State<ServerState>) -> Json<KycState> {
    Json(state.kyc.status())
}

/// POST /api/kyc - 提交 KYC 文件
///
/// multipart 字段: `aadhaar`, `pan`, `fssai`, `kitchen_photos` (可多个)
pub async fn submit(
    State(state): State<ServerState>,
    multipart: Multipart,
) -> AppResult<Json<KycState>> {
    let files = read_files(multipart).await?;
    if files.is_empty() {
        return Err(AppError::new(ErrorCode::NoFileProvided));
    }
    Ok(Json(state.kyc.submit(files)?))
}
