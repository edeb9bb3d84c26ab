use shared::order::InvalidTransition;
use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Manager errors
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Order item not found: {0}")]
    ItemNotFound(String),

    #[error("Order has no items")]
    OrderEmpty,

    #[error("Quantity must be between 1 and 9999 (dish {dish_id}, got {quantity})")]
    InvalidQuantity { dish_id: String, quantity: i32 },

    #[error("Order total is out of range")]
    TotalOverflow,

    #[error("Party size {party_size} does not fit table capacity {capacity}")]
    InvalidPartySize { party_size: i32, capacity: u32 },

    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("Table {0} is not available")]
    TableNotAvailable(u32),

    #[error("Table {0} is already empty")]
    TableAlreadyEmpty(u32),

    #[error("Dish not found: {0}")]
    DishNotFound(String),

    #[error("Dish is not available: {0}")]
    DishUnavailable(String),

    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),

    #[error("Order {0} is not active")]
    OrderNotActive(String),

    #[error("Order already completed: {0}")]
    OrderAlreadyCompleted(String),

    #[error("Order already cancelled: {0}")]
    OrderAlreadyCancelled(String),

    #[error("Order {id} has {open} item(s) not yet delivered")]
    OrderHasOpenItems { id: String, open: usize },

    #[error("Orders can only be completed or cancelled")]
    InvalidOrderStatus,
}

pub type ManagerResult<T> = Result<T, ManagerError>;

impl ManagerError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::OrderNotFound(_) => ErrorCode::OrderNotFound,
            Self::ItemNotFound(_) => ErrorCode::OrderItemNotFound,
            Self::OrderEmpty => ErrorCode::OrderEmpty,
            Self::InvalidQuantity { .. } | Self::InvalidPartySize { .. } | Self::TotalOverflow => {
                ErrorCode::ValidationFailed
            }
            Self::TableNotFound(_) => ErrorCode::TableNotFound,
            Self::TableNotAvailable(_) => ErrorCode::TableNotAvailable,
            Self::TableAlreadyEmpty(_) => ErrorCode::TableAlreadyEmpty,
            Self::DishNotFound(_) => ErrorCode::DishNotFound,
            Self::DishUnavailable(_) => ErrorCode::DishUnavailable,
            Self::InvalidTransition(_) => ErrorCode::ItemStatusTransitionInvalid,
            Self::OrderNotActive(_) => ErrorCode::OrderNotActive,
            Self::OrderAlreadyCompleted(_) => ErrorCode::OrderAlreadyCompleted,
            Self::OrderAlreadyCancelled(_) => ErrorCode::OrderAlreadyCancelled,
            Self::OrderHasOpenItems { .. } => ErrorCode::OrderHasOpenItems,
            Self::InvalidOrderStatus => ErrorCode::InvalidRequest,
        }
    }
}

impl From<ManagerError> for AppError {
    fn from(err: ManagerError) -> Self {
        let app = AppError::with_message(err.code(), err.to_string());
        match err {
            ManagerError::InvalidQuantity { dish_id, quantity } => app
                .with_detail("field", "quantity")
                .with_detail("dishId", dish_id)
                .with_detail("value", quantity),
            ManagerError::InvalidPartySize {
                party_size,
                capacity,
            } => app
                .with_detail("field", "partySize")
                .with_detail("value", party_size)
                .with_detail("capacity", capacity),
            ManagerError::InvalidTransition(InvalidTransition { from, to }) => app
                .with_detail("from", from.as_str())
                .with_detail("to", to.as_str()),
            ManagerError::OrderHasOpenItems { open, .. } => app.with_detail("openItems", open),
            ManagerError::TotalOverflow => app.with_detail("field", "total"),
            _ => app,
        }
    }
}
