//! 嵌入式存储 - redb
//!
//! 订单与主题偏好共用一个 redb 文件 (`WORK_DIR/dabbzo.redb`)。
//! 各模块自行定义表，通过 [`StorageError`] 统一上报存储错误。

use redb::Database;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// 数据库文件名
pub const DB_FILE: &str = "dabbzo.redb";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Open or create the database file
pub fn open(path: impl AsRef<Path>) -> StorageResult<Arc<Database>> {
    let db = Database::create(path)?;
    Ok(Arc::new(db))
}

/// Open an in-memory database (for testing)
pub fn open_in_memory() -> StorageResult<Arc<Database>> {
    let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
    Ok(Arc::new(db))
}

impl From<StorageError> for shared::error::AppError {
    fn from(err: StorageError) -> Self {
        use shared::error::{AppError, ErrorCode};

        let code = match &err {
            StorageError::Serialization(_) => ErrorCode::StorageCorrupted,
            _ => classify_redb_error(&err.to_string()),
        };
        AppError::with_message(code, err.to_string())
    }
}

/// 将 redb 错误按描述分类 (磁盘满 / 数据损坏 / 其他视为繁忙)
fn classify_redb_error(message: &str) -> shared::error::ErrorCode {
    use shared::error::ErrorCode;

    let lower = message.to_lowercase();
    if lower.contains("no space") || lower.contains("disk full") || lower.contains("enospc") {
        return ErrorCode::StorageFull;
    }
    if lower.contains("corrupt") || lower.contains("invalid database") {
        return ErrorCode::StorageCorrupted;
    }
    ErrorCode::SystemBusy
}
