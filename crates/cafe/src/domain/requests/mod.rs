mod cart;
mod contact;
mod order;

pub use self::cart::{AddToCartRequest, RemoveCartRequest, UpdateCartRequest};
pub use self::contact::ContactRequest;
pub use self::order::CheckoutRequest;
