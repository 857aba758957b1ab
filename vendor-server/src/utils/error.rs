//! 统一错误处理
//!
//! 错误类型统一定义在 `shared::error`，此处仅做再导出，
//! 另外提供 multipart 解析错误到 [`AppError`] 的转换。
//!
//! # 错误码规范
//!
//! | 范围 | 分类 |
//! |------|------|
//! | 0xxx | 通用错误 |
//! | 4xxx | 订单 |
//! | 5xxx | 收益 / 提现 |
//! | 6xxx | 菜单 / 上传 |
//! | 7xxx | 商家资料 / 入驻 / KYC |
//! | 8xxx | 客服 |
//! | 9xxx | 系统错误 |

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode, ErrorResponse};

use axum::extract::multipart::MultipartError;

/// multipart 读取失败视为请求格式错误
pub fn multipart_error(err: MultipartError) -> AppError {
    AppError::invalid_request(format!("Invalid multipart request: {}", err.body_text()))
}
