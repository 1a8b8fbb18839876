use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
    abstract_trait::{
        DynCartRepository, DynCartService, DynContactService, DynMenuRepository, DynMenuService,
        DynOrderRepository, DynOrderService,
    },
    repository::{CartRepository, MenuRepository, OrderRepository},
    service::{
        CartService, CartServiceDeps, ContactService, MenuService, OrderService,
        OrderServiceDeps,
    },
};

#[derive(Clone)]
pub struct DependenciesInject {
    pub menu_service: DynMenuService,
    pub cart_service: DynCartService,
    pub order_service: DynOrderService,
    pub contact_service: DynContactService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("menu_service", &"DynMenuService")
            .field("cart_service", &"DynCartService")
            .field("order_service", &"DynOrderService")
            .field("contact_service", &"DynContactService")
            .finish()
    }
}

impl DependenciesInject {
    /// The cart store and the order ledger are shared by the cart and order
    /// services, so checkout sees exactly what the cart endpoints wrote.
    pub async fn new(registry: Arc<Mutex<Registry>>) -> Self {
        let menu_repository: DynMenuRepository = Arc::new(MenuRepository::new());
        let cart_repository: DynCartRepository = Arc::new(CartRepository::new());
        let order_repository: DynOrderRepository = Arc::new(OrderRepository::new());

        let menu_service: DynMenuService = Arc::new(MenuService::new(menu_repository.clone()));

        let cart_service: DynCartService = Arc::new(
            CartService::new(CartServiceDeps {
                menu: menu_repository,
                cart: cart_repository.clone(),
                registry: registry.clone(),
            })
            .await,
        );

        let order_service: DynOrderService = Arc::new(
            OrderService::new(OrderServiceDeps {
                cart: cart_repository,
                orders: order_repository,
                registry,
            })
            .await,
        );

        let contact_service: DynContactService = Arc::new(ContactService::new());

        Self {
            menu_service,
            cart_service,
            order_service,
            contact_service,
        }
    }
}
