use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),

    #[error("Cart item not found: {0}")]
    CartItemNotFound(String),

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
