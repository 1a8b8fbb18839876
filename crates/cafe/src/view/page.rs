use crate::{
    domain::response::OrderResponse,
    model::{MenuCategory, MenuItem},
    view::rating_stars,
};
use askama::Template;
use axum::response::Html;
use rust_decimal::Decimal;
use shared::{errors::HttpError, utils::format_rupiah};
use tracing::error;

pub fn render<T: Template>(template: &T) -> Result<Html<String>, HttpError> {
    template.render().map(Html).map_err(|e| {
        error!("❌ Failed to render template: {e}");
        HttpError::Internal("Gagal menampilkan halaman".into())
    })
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub title: &'static str,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub title: &'static str,
}

#[derive(Template)]
#[template(path = "gallery.html")]
pub struct GalleryTemplate {
    pub title: &'static str,
}

#[derive(Template)]
#[template(path = "cart.html")]
pub struct CartTemplate {
    pub title: &'static str,
}

#[derive(Debug, Clone)]
pub struct MenuCardView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub price_label: String,
    pub image: String,
    pub rating_label: String,
    pub stars: Vec<&'static str>,
}

impl From<&MenuItem> for MenuCardView {
    fn from(item: &MenuItem) -> Self {
        MenuCardView {
            id: item.id.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            price_label: format_rupiah(item.price),
            image: item.image.clone(),
            rating_label: format!("{:.1}", item.rating),
            stars: rating_stars(item.rating)
                .iter()
                .map(|star| star.css_class())
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MenuCategoryView {
    pub name: String,
    pub items: Vec<MenuCardView>,
}

impl From<&MenuCategory> for MenuCategoryView {
    fn from(category: &MenuCategory) -> Self {
        MenuCategoryView {
            name: category.name.clone(),
            items: category.items.iter().map(MenuCardView::from).collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "menu.html")]
pub struct MenuTemplate {
    pub title: &'static str,
    pub categories: Vec<MenuCategoryView>,
}

pub struct ContactInfo {
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub hours: &'static str,
}

impl ContactInfo {
    pub const CAFE: ContactInfo = ContactInfo {
        address: "Jl. Kopi Nikmat No. 123, Coffee Town",
        phone: "0812-3456-7890",
        email: "info@kopiasik.com",
        hours: "Setiap Hari: 08:00 - 22:00",
    };
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub title: &'static str,
    pub info: ContactInfo,
}

#[derive(Debug, Clone)]
pub struct ReceiptLineView {
    pub name: String,
    pub quantity: u32,
    pub subtotal_label: String,
}

#[derive(Debug, Clone)]
pub struct ReceiptView {
    pub order_id: String,
    pub order_time: String,
    pub customer_name: String,
    pub payment_method: String,
    pub lines: Vec<ReceiptLineView>,
    pub total_label: String,
}

impl From<OrderResponse> for ReceiptView {
    fn from(order: OrderResponse) -> Self {
        let lines = order
            .items
            .iter()
            .map(|item| ReceiptLineView {
                name: item.name.clone(),
                quantity: item.quantity,
                subtotal_label: format_rupiah(item.price * Decimal::from(item.quantity)),
            })
            .collect();

        ReceiptView {
            order_id: order.order_id,
            order_time: order.order_time,
            customer_name: order.customer_name,
            payment_method: order.payment_method,
            lines,
            total_label: format_rupiah(order.total_amount),
        }
    }
}

#[derive(Template)]
#[template(path = "receipt.html")]
pub struct ReceiptTemplate {
    pub title: &'static str,
    pub receipt: Option<ReceiptView>,
    pub message: &'static str,
}
