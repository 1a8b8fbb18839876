mod cart;
mod contact;
mod menu;
mod order;

pub use self::cart::{CartService, CartServiceDeps};
pub use self::contact::ContactService;
pub use self::menu::MenuService;
pub use self::order::{OrderService, OrderServiceDeps};
