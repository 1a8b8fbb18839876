use crate::model::CartEntry;
use chrono::{DateTime, Local};
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct Order {
    pub order_id: String,
    pub customer_name: String,
    pub payment_method: String,
    pub items: Vec<CartEntry>,
    pub total_amount: Decimal,
    pub order_time: DateTime<Local>,
}

/// Everything an order needs except its id, which the ledger assigns.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_name: String,
    pub payment_method: String,
    pub items: Vec<CartEntry>,
    pub total_amount: Decimal,
    pub order_time: DateTime<Local>,
}

impl NewOrder {
    pub fn into_order(self, order_id: String) -> Order {
        Order {
            order_id,
            customer_name: self.customer_name,
            payment_method: self.payment_method,
            items: self.items,
            total_amount: self.total_amount,
            order_time: self.order_time,
        }
    }
}

pub fn order_total(items: &[CartEntry]) -> Decimal {
    items.iter().map(CartEntry::subtotal).sum()
}
