use crate::db::repository::RepoError;
use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Order pipeline errors
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Order already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid table number")]
    InvalidTable,

    #[error("Invalid order items")]
    InvalidItems,

    #[error("Invalid order status: {0}")]
    InvalidStatus(String),

    #[error("Table belongs to another waiter")]
    ForbiddenOwner { owner: String },

    #[error("Storage error: {0}")]
    Storage(#[from] RepoError),
}

pub type OrderResult<T> = Result<T, OrderError>;

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound(id) => {
                AppError::new(ErrorCode::OrderNotFound).with_detail("order_id", id)
            }
            OrderError::AlreadyExists(id) => {
                AppError::with_message(ErrorCode::AlreadyExists, format!("Order {id} already exists"))
            }
            OrderError::InvalidTable => AppError::new(ErrorCode::InvalidTableNumber),
            OrderError::InvalidItems => AppError::new(ErrorCode::OrderItemsInvalid),
            OrderError::InvalidStatus(status) => {
                AppError::new(ErrorCode::InvalidOrderStatus).with_detail("status", status)
            }
            OrderError::ForbiddenOwner { owner } => {
                tracing::debug!(owner = %owner, "Rejected change to another waiter's order");
                AppError::new(ErrorCode::OrderOwnedByOtherWaiter)
            }
            OrderError::Storage(e) => AppError::from(e),
        }
    }
}
