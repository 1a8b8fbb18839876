use crate::{
    domain::{
        requests::{AddToCartRequest, RemoveCartRequest, UpdateCartRequest},
        response::{CartItemsResponse, MessageResponse},
    },
    model::{CartEntry, CartUpdate, MenuItem},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynCartRepository = Arc<dyn CartRepositoryTrait + Send + Sync>;
pub type DynCartService = Arc<dyn CartServiceTrait + Send + Sync>;

/// Live cart entries keyed by menu item id. Every method is one critical
/// section on the cart lock.
#[async_trait]
pub trait CartRepositoryTrait {
    /// Inserts the item with quantity 1, or bumps the quantity of the
    /// existing entry by one.
    async fn add(&self, item: MenuItem) -> CartEntry;
    /// `None` when the id is not in the cart. A quantity of zero or less
    /// removes the entry.
    async fn update_quantity(&self, id: &str, quantity: i64) -> Option<CartUpdate>;
    async fn remove(&self, id: &str) -> Option<CartEntry>;
    async fn find_all(&self) -> Vec<CartEntry>;
    /// Snapshots and clears the cart in one step.
    async fn take_all(&self) -> Vec<CartEntry>;
}

#[async_trait]
pub trait CartServiceTrait {
    async fn add_to_cart(&self, req: &AddToCartRequest) -> Result<MessageResponse, ServiceError>;
    async fn update_cart(&self, req: &UpdateCartRequest) -> Result<MessageResponse, ServiceError>;
    async fn remove_from_cart(
        &self,
        req: &RemoveCartRequest,
    ) -> Result<MessageResponse, ServiceError>;
    async fn get_cart_items(&self) -> Result<CartItemsResponse, ServiceError>;
}
