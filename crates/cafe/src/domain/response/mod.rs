mod cart;
mod message;
mod order;

pub use self::cart::{CartItemResponse, CartItemsResponse};
pub use self::message::MessageResponse;
pub use self::order::{CheckoutResponse, ORDER_TIME_FORMAT, OrderResponse};
