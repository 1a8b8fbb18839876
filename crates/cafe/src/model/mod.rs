mod cart;
mod menu;
mod order;

pub use self::cart::{CartEntry, CartUpdate};
pub use self::menu::{MenuCategory, MenuItem};
pub use self::order::{NewOrder, Order, order_total};
