use crate::model::CartEntry;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire view of a cart entry: the menu fields flattened next to the quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartItemResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image: String,
    pub category: String,
    pub rating: f64,
    pub quantity: u32,
}

impl From<CartEntry> for CartItemResponse {
    fn from(entry: CartEntry) -> Self {
        let CartEntry { item, quantity } = entry;
        CartItemResponse {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            image: item.image,
            category: item.category,
            rating: item.rating,
            quantity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartItemsResponse {
    pub items: Vec<CartItemResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MenuItem;
    use serde_json::json;

    #[test]
    fn flattens_menu_fields_next_to_quantity() {
        let entry = CartEntry {
            item: MenuItem {
                id: "coffee-latte".into(),
                name: "Latte".into(),
                description: "Espresso dengan susu steamed dan sedikit foam".into(),
                price: Decimal::from(32_000),
                image: "/static/img/menu/latte.jpg".into(),
                category: "Kopi".into(),
                rating: 4.7,
            },
            quantity: 3,
        };

        let value = serde_json::to_value(CartItemResponse::from(entry)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "coffee-latte",
                "name": "Latte",
                "description": "Espresso dengan susu steamed dan sedikit foam",
                "price": 32000.0,
                "image": "/static/img/menu/latte.jpg",
                "category": "Kopi",
                "rating": 4.7,
                "quantity": 3
            })
        );
    }
}
