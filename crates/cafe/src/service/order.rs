use crate::{
    abstract_trait::{DynCartRepository, DynOrderRepository, OrderServiceTrait},
    domain::{
        requests::CheckoutRequest,
        response::{CheckoutResponse, OrderResponse},
    },
    model::{NewOrder, order_total},
};
use async_trait::async_trait;
use chrono::Local;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, Status},
};
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::{error, info, warn};

pub struct OrderService {
    cart: DynCartRepository,
    orders: DynOrderRepository,
    metrics: Metrics,
}

pub struct OrderServiceDeps {
    pub cart: DynCartRepository,
    pub orders: DynOrderRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl OrderService {
    pub async fn new(deps: OrderServiceDeps) -> Self {
        let OrderServiceDeps {
            cart,
            orders,
            registry,
        } = deps;

        let metrics = Metrics::new();
        metrics.register(&mut *registry.lock().await, "order_service", "OrderService");

        Self {
            cart,
            orders,
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

    fn required<'a>(&self, value: &'a str, message: &str) -> Result<&'a str, ServiceError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ServiceError::InvalidInput(message.to_string()));
        }
        Ok(value)
    }
}

#[async_trait]
impl OrderServiceTrait for OrderService {
    async fn checkout(&self, req: &CheckoutRequest) -> Result<CheckoutResponse, ServiceError> {
        let start = Instant::now();

        let fields = self
            .required(&req.customer_name, "Nama Pelanggan tidak boleh kosong.")
            .and_then(|name| {
                self.required(&req.payment_method, "Metode pembayaran tidak boleh kosong.")
                    .map(|method| (name, method))
            });
        let (customer_name, payment_method) = match fields {
            Ok(fields) => fields,
            Err(e) => {
                error!("❌ Checkout rejected: {e}");
                self.complete(Method::Post, start, false);
                return Err(e);
            }
        };

        // snapshot and clear happen under one cart lock
        let items = self.cart.take_all().await;
        if items.is_empty() {
            warn!("Checkout attempted with an empty cart");
            self.complete(Method::Post, start, false);
            return Err(ServiceError::EmptyCart);
        }

        let total_amount = order_total(&items);
        let item_count = items.len();

        let order = self
            .orders
            .create(NewOrder {
                customer_name: customer_name.to_string(),
                payment_method: payment_method.to_string(),
                items,
                total_amount,
                order_time: Local::now(),
            })
            .await;

        info!(
            "✅ Order {} processed for {}. Total: {}. Method: {}. Items: {}",
            order.order_id, order.customer_name, order.total_amount, order.payment_method, item_count
        );
        self.complete(Method::Post, start, true);

        let order = OrderResponse::from(order);
        Ok(CheckoutResponse {
            message: "Pemesanan berhasil diproses! Keranjang Anda telah dikosongkan.".into(),
            order_id: order.order_id.clone(),
            customer_name: order.customer_name.clone(),
            payment_method: order.payment_method.clone(),
            order,
        })
    }

    async fn find_by_id(&self, order_id: &str) -> Result<OrderResponse, ServiceError> {
        let start = Instant::now();

        match self.orders.find_by_id(order_id).await {
            Some(order) => {
                info!("🧾 Found order {order_id}");
                self.complete(Method::Get, start, true);
                Ok(order.into())
            }
            None => {
                warn!("Order '{order_id}' not found");
                self.complete(Method::Get, start, false);
                Err(ServiceError::OrderNotFound(order_id.to_string()))
            }
        }
    }
}
