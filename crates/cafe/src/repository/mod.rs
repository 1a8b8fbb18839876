mod cart;
mod menu;
mod order;

pub use self::cart::CartRepository;
pub use self::menu::MenuRepository;
pub use self::order::OrderRepository;
