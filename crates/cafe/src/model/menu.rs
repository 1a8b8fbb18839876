use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image: String,
    pub category: String,
    pub rating: f64,
}

/// Items of one category, in catalog order.
#[derive(Debug, Clone)]
pub struct MenuCategory {
    pub name: String,
    pub items: Vec<MenuItem>,
}
