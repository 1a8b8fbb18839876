use crate::{
    abstract_trait::OrderRepositoryTrait,
    model::{NewOrder, Order},
};
use async_trait::async_trait;
use std::{
    collections::HashMap,
    sync::atomic::{AtomicU64, Ordering},
};
use tokio::sync::Mutex;

/// In-memory order ledger. Orders are never updated or deleted.
#[derive(Debug)]
pub struct OrderRepository {
    orders: Mutex<HashMap<String, Order>>,
    next_id: AtomicU64,
}

impl Default for OrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderRepository {
    pub fn new() -> Self {
        Self {
            orders: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

#[async_trait]
impl OrderRepositoryTrait for OrderRepository {
    async fn create(&self, order: NewOrder) -> Order {
        let mut orders = self.orders.lock().await;

        // advanced only while the ledger lock is held, so ids land in order
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let order = order.into_order(format!("ORD-{id}"));

        orders.insert(order.order_id.clone(), order.clone());
        order
    }

    async fn find_by_id(&self, order_id: &str) -> Option<Order> {
        self.orders.lock().await.get(order_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use rust_decimal::Decimal;

    fn new_order(customer: &str) -> NewOrder {
        NewOrder {
            customer_name: customer.into(),
            payment_method: "Tunai".into(),
            items: Vec::new(),
            total_amount: Decimal::ZERO,
            order_time: Local::now(),
        }
    }

    #[tokio::test]
    async fn ids_are_sequential() {
        let ledger = OrderRepository::new();
        let first = ledger.create(new_order("Budi")).await;
        let second = ledger.create(new_order("Sari")).await;

        assert_eq!(first.order_id, "ORD-1");
        assert_eq!(second.order_id, "ORD-2");
    }

    #[tokio::test]
    async fn stored_orders_can_be_found() {
        let ledger = OrderRepository::new();
        let created = ledger.create(new_order("Budi")).await;

        let found = ledger.find_by_id(&created.order_id).await.unwrap();
        assert_eq!(found.customer_name, "Budi");
        assert!(ledger.find_by_id("ORD-99").await.is_none());
        assert!(ledger.find_by_id("").await.is_none());
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let ledger = std::sync::Arc::new(OrderRepository::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let ledger = ledger.clone();
                tokio::spawn(async move { ledger.create(new_order(&format!("c{i}"))).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().order_id);
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 16);
        assert!(ledger.find_by_id("ORD-16").await.is_some());
    }
}
