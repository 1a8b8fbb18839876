use crate::{domain::response::CartItemResponse, model::Order};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const ORDER_TIME_FORMAT: &str = "%d %B %Y, %H:%M:%S";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    #[serde(rename = "orderID")]
    pub order_id: String,
    pub customer_name: String,
    pub payment_method: String,
    pub items: Vec<CartItemResponse>,
    pub total_amount: Decimal,
    pub order_time: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            order_time: order.order_time.format(ORDER_TIME_FORMAT).to_string(),
            order_id: order.order_id,
            customer_name: order.customer_name,
            payment_method: order.payment_method,
            items: order.items.into_iter().map(Into::into).collect(),
            total_amount: order.total_amount,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub message: String,
    #[serde(rename = "orderID")]
    pub order_id: String,
    pub customer_name: String,
    pub payment_method: String,
    pub order: OrderResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CartEntry, MenuItem};
    use chrono::{Local, TimeZone};

    #[test]
    fn serializes_with_original_field_names() {
        let order = Order {
            order_id: "ORD-1".into(),
            customer_name: "Budi".into(),
            payment_method: "Tunai".into(),
            items: vec![CartEntry {
                item: MenuItem {
                    id: "food-croissant".into(),
                    name: "Croissant".into(),
                    description: "Pastry croissant Prancis".into(),
                    price: Decimal::from(18_000),
                    image: "/static/img/menu/croissant.jpg".into(),
                    category: "Makanan & Snack".into(),
                    rating: 4.3,
                },
                quantity: 1,
            }],
            total_amount: Decimal::from(18_000),
            order_time: Local.with_ymd_and_hms(2026, 3, 5, 14, 3, 9).unwrap(),
        };

        let value = serde_json::to_value(OrderResponse::from(order)).unwrap();
        assert_eq!(value["orderID"], "ORD-1");
        assert_eq!(value["customerName"], "Budi");
        assert_eq!(value["paymentMethod"], "Tunai");
        assert_eq!(value["totalAmount"], 18000.0);
        assert_eq!(value["orderTime"], "05 March 2026, 14:03:09");
        assert_eq!(value["items"][0]["id"], "food-croissant");
        assert_eq!(value["items"][0]["quantity"], 1);
    }
}
