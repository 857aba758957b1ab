use crate::db::StorageError;
use crate::orders::ManagerError;
use crate::theme::ThemeError;
use thiserror::Error;

/// 启动期错误
///
/// 请求处理使用 [`shared::error::AppError`]；这里只覆盖服务器初始化和运行。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("存储错误: {0}")]
    Storage(#[from] StorageError),

    #[error("订单初始化失败: {0}")]
    Orders(#[from] ManagerError),

    #[error("主题初始化失败: {0}")]
    Theme(#[from] ThemeError),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

/// 服务器层 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
