//! Menu API Handlers

use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
};
use serde::Deserialize;

use crate::api::uploads::read_files;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{Dish, DishInput, MenuFilter};

/// Multipart field carrying the dish photo
const IMAGE_FIELD: &str = "image";

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}

/// GET /api/menu?category= - 菜品列表
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Dish>>> {
    let filter = match query.category.as_deref() {
        None | Some("") => MenuFilter::All,
        Some(category) => category.parse::<MenuFilter>().map_err(|e| {
            AppError::with_message(ErrorCode::DishInvalidCategory, e.to_string())
                .with_detail("category", category)
        })?,
    };
    Ok(Json(state.menu.list(filter)))
}

/// GET /api/menu/:id - 获取单个菜品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Dish>> {
    Ok(Json(state.menu.get(&id)?))
}

/// POST /api/menu - 创建菜品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DishInput>,
) -> AppResult<Json<Dish>> {
    Ok(Json(state.menu.create(payload)?))
}

/// PUT /api/menu/:id - 更新菜品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DishInput>,
) -> AppResult<Json<Dish>> {
    Ok(Json(state.menu.update(&id, payload)?))
}

/// POST /api/menu/:id/availability - 切换供应状态
pub async fn toggle_availability(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Dish>> {
    Ok(Json(state.menu.toggle_availability(&id)?))
}

/// POST /api/menu/:id/image - 上传菜品图片 (multipart `image`)
pub async fn upload_image(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> AppResult<Json<Dish>> {
    let file = read_files(multipart)
        .await?
        .into_iter()
        .find(|f| f.field == IMAGE_FIELD)
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::NoFileProvided,
                "No 'image' field found. Field name must be 'image'",
            )
        })?;
    Ok(Json(state.menu.set_image(&id, &file)?))
}

/// DELETE /api/menu/:id/image - 移除菜品图片
pub async fn clear_image(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Dish>> {
    Ok(Json(state.menu.clear_image(&id)?))
}
