use crate::{
    abstract_trait::{CartServiceTrait, DynCartRepository, DynMenuRepository},
    domain::{
        requests::{AddToCartRequest, RemoveCartRequest, UpdateCartRequest},
        response::{CartItemResponse, CartItemsResponse, MessageResponse},
    },
    model::CartUpdate,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, Status},
};
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::{debug, error, info};

pub struct CartService {
    menu: DynMenuRepository,
    cart: DynCartRepository,
    metrics: Metrics,
}

pub struct CartServiceDeps {
    pub menu: DynMenuRepository,
    pub cart: DynCartRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl CartService {
    pub async fn new(deps: CartServiceDeps) -> Self {
        let CartServiceDeps {
            menu,
            cart,
            registry,
        } = deps;

        let metrics = Metrics::new();
        metrics.register(&mut *registry.lock().await, "cart_service", "CartService");

        Self {
            menu,
            cart,
            metrics,
        }
    }

    fn complete(&self, method: Method, start: Instant, is_success: bool) {
        let status = if is_success {
            Status::Success
        } else {
            Status::Error
        };
        self.metrics
            .record(method, status, start.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl CartServiceTrait for CartService {
    async fn add_to_cart(&self, req: &AddToCartRequest) -> Result<MessageResponse, ServiceError> {
        let start = Instant::now();

        let Some(item) = self.menu.find_by_id(&req.id) else {
            error!("❌ Menu item not found: id={}", req.id);
            self.complete(Method::Post, start, false);
            return Err(ServiceError::MenuItemNotFound(req.id.clone()));
        };

        let name = item.name.clone();
        let entry = self.cart.add(item).await;

        info!(
            "🛒 Added '{}' (id={}) to cart, quantity now {}",
            name, req.id, entry.quantity
        );
        self.complete(Method::Post, start, true);

        Ok(MessageResponse::new(format!(
            "'{name}' berhasil ditambahkan ke keranjang!"
        )))
    }

    async fn update_cart(&self, req: &UpdateCartRequest) -> Result<MessageResponse, ServiceError> {
        let start = Instant::now();

        match self.cart.update_quantity(&req.id, req.quantity).await {
            Some(CartUpdate::Updated(entry)) => {
                info!(
                    "🔄 Quantity of '{}' (id={}) set to {}",
                    entry.item.name, req.id, entry.quantity
                );
            }
            Some(CartUpdate::Removed(entry)) => {
                info!(
                    "🗑️ Removed '{}' (id={}) from cart, requested quantity {}",
                    entry.item.name, req.id, req.quantity
                );
            }
            None => {
                error!("❌ Cart item not found for update: id={}", req.id);
                self.complete(Method::Post, start, false);
                return Err(ServiceError::CartItemNotFound(req.id.clone()));
            }
        }

        self.complete(Method::Post, start, true);
        Ok(MessageResponse::new("Keranjang berhasil diperbarui"))
    }

    async fn remove_from_cart(
        &self,
        req: &RemoveCartRequest,
    ) -> Result<MessageResponse, ServiceError> {
        let start = Instant::now();

        let Some(entry) = self.cart.remove(&req.id).await else {
            error!("❌ Cart item not found for removal: id={}", req.id);
            self.complete(Method::Post, start, false);
            return Err(ServiceError::CartItemNotFound(req.id.clone()));
        };

        info!("🗑️ Removed '{}' (id={}) from cart", entry.item.name, req.id);
        self.complete(Method::Post, start, true);

        Ok(MessageResponse::new(format!(
            "Item '{}' berhasil dihapus dari keranjang",
            entry.item.name
        )))
    }

    async fn get_cart_items(&self) -> Result<CartItemsResponse, ServiceError> {
        let start = Instant::now();

        let items: Vec<CartItemResponse> = self
            .cart
            .find_all()
            .await
            .into_iter()
            .map(CartItemResponse::from)
            .collect();

        debug!("Sending {} cart entries: {:?}", items.len(), items);
        self.complete(Method::Get, start, true);

        Ok(CartItemsResponse { items })
    }
}
