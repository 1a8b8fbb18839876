use crate::{
    domain::{
        requests::CheckoutRequest,
        response::{CheckoutResponse, OrderResponse},
    },
    model::{NewOrder, Order},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynOrderRepository = Arc<dyn OrderRepositoryTrait + Send + Sync>;
pub type DynOrderService = Arc<dyn OrderServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderRepositoryTrait {
    /// Assigns the next sequential id and stores the order under the same lock.
    async fn create(&self, order: NewOrder) -> Order;
    async fn find_by_id(&self, order_id: &str) -> Option<Order>;
}

#[async_trait]
pub trait OrderServiceTrait {
    async fn checkout(&self, req: &CheckoutRequest) -> Result<CheckoutResponse, ServiceError>;
    async fn find_by_id(&self, order_id: &str) -> Result<OrderResponse, ServiceError>;
}
