use crate::db::StorageError;
use shared::error::{AppError, ErrorCode};
use shared::models::OrderStatus;
use thiserror::Error;

/// Manager errors
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Cannot {action} order {order_id} in {status} status")]
    InvalidTransition {
        order_id: String,
        status: OrderStatus,
        action: &'static str,
    },
}

pub type ManagerResult<T> = Result<T, ManagerError>;

impl From<ManagerError> for AppError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::Storage(e) => e.into(),
            ManagerError::OrderNotFound(id) => {
                AppError::with_message(ErrorCode::OrderNotFound, format!("Order {id} not found"))
                    .with_detail("order_id", id)
            }
            ManagerError::InvalidTransition {
                order_id,
                status,
                action,
            } => AppError::with_message(
                ErrorCode::OrderInvalidTransition,
                format!("Cannot {action} order {order_id} in {status} status"),
            )
            .with_detail("order_id", order_id)
            .with_detail("status", status.as_str())
            .with_detail("action", action),
        }
    }
}
