mod cart;
mod contact;
mod menu;
mod order;

pub use self::cart::{CartRepositoryTrait, CartServiceTrait, DynCartRepository, DynCartService};
pub use self::contact::{ContactServiceTrait, DynContactService};
pub use self::menu::{DynMenuRepository, DynMenuService, MenuRepositoryTrait, MenuServiceTrait};
pub use self::order::{
    DynOrderRepository, DynOrderService, OrderRepositoryTrait, OrderServiceTrait,
};
