use crate::model::MenuItem;
use rust_decimal::Decimal;

/// A menu item copied into the cart with its requested quantity.
///
/// The quantity is at least 1 for every entry held by the cart store.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartEntry {
    pub fn new(item: MenuItem) -> Self {
        Self { item, quantity: 1 }
    }

    pub fn subtotal(&self) -> Decimal {
        self.item.price * Decimal::from(self.quantity)
    }
}

/// Outcome of a quantity update on an existing entry.
#[derive(Debug, Clone, PartialEq)]
pub enum CartUpdate {
    Updated(CartEntry),
    Removed(CartEntry),
}
