use crate::{
    abstract_trait::CartRepositoryTrait,
    model::{CartEntry, CartUpdate, MenuItem},
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

/// In-memory cart keyed by item id. Listing order follows the ids.
#[derive(Debug, Default)]
pub struct CartRepository {
    entries: Mutex<BTreeMap<String, CartEntry>>,
}

impl CartRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartRepositoryTrait for CartRepository {
    async fn add(&self, item: MenuItem) -> CartEntry {
        let mut entries = self.entries.lock().await;

        let entry = entries
            .entry(item.id.clone())
            .and_modify(|entry| entry.quantity = entry.quantity.saturating_add(1))
            .or_insert_with(|| CartEntry::new(item));

        entry.clone()
    }

    async fn update_quantity(&self, id: &str, quantity: i64) -> Option<CartUpdate> {
        let mut entries = self.entries.lock().await;

        if quantity <= 0 {
            return entries.remove(id).map(CartUpdate::Removed);
        }

        let entry = entries.get_mut(id)?;
        entry.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        Some(CartUpdate::Updated(entry.clone()))
    }

    async fn remove(&self, id: &str) -> Option<CartEntry> {
        self.entries.lock().await.remove(id)
    }

    async fn find_all(&self) -> Vec<CartEntry> {
        self.entries.lock().await.values().cloned().collect()
    }

    async fn take_all(&self) -> Vec<CartEntry> {
        let mut entries = self.entries.lock().await;
        std::mem::take(&mut *entries).into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{abstract_trait::MenuRepositoryTrait, repository::MenuRepository};

    fn menu_item(id: &str) -> MenuItem {
        MenuRepository::new().find_by_id(id).unwrap()
    }

    #[tokio::test]
    async fn adding_twice_increments_quantity() {
        let cart = CartRepository::new();
        cart.add(menu_item("coffee-espresso")).await;
        let entry = cart.add(menu_item("coffee-espresso")).await;

        assert_eq!(entry.quantity, 2);
        let all = cart.find_all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].quantity, 2);
    }

    #[tokio::test]
    async fn update_sets_quantity_or_removes() {
        let cart = CartRepository::new();
        cart.add(menu_item("coffee-latte")).await;

        match cart.update_quantity("coffee-latte", 5).await {
            Some(CartUpdate::Updated(entry)) => assert_eq!(entry.quantity, 5),
            other => panic!("unexpected update result: {other:?}"),
        }

        match cart.update_quantity("coffee-latte", 0).await {
            Some(CartUpdate::Removed(entry)) => assert_eq!(entry.item.id, "coffee-latte"),
            other => panic!("unexpected update result: {other:?}"),
        }
        assert!(cart.find_all().await.is_empty());
    }

    #[tokio::test]
    async fn update_of_missing_entry_is_none() {
        let cart = CartRepository::new();
        assert!(cart.update_quantity("coffee-latte", 2).await.is_none());
        assert!(cart.update_quantity("coffee-latte", -1).await.is_none());
    }

    #[tokio::test]
    async fn remove_returns_the_deleted_entry() {
        let cart = CartRepository::new();
        cart.add(menu_item("food-croissant")).await;

        let removed = cart.remove("food-croissant").await.unwrap();
        assert_eq!(removed.item.name, "Croissant");
        assert!(cart.remove("food-croissant").await.is_none());
    }

    #[tokio::test]
    async fn take_all_leaves_the_cart_empty() {
        let cart = CartRepository::new();
        cart.add(menu_item("coffee-espresso")).await;
        cart.add(menu_item("food-croissant")).await;

        let taken = cart.take_all().await;
        assert_eq!(taken.len(), 2);
        assert!(cart.find_all().await.is_empty());
        assert!(cart.take_all().await.is_empty());
    }

    #[tokio::test]
    async fn listing_is_ordered_by_id() {
        let cart = CartRepository::new();
        cart.add(menu_item("food-croissant")).await;
        cart.add(menu_item("coffee-mocha")).await;

        let ids: Vec<_> = cart.find_all().await.into_iter().map(|e| e.item.id).collect();
        assert_eq!(ids, vec!["coffee-mocha", "food-croissant"]);
    }
}
