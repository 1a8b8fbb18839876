use crate::{
    abstract_trait::{DynMenuService, DynOrderService},
    state::AppState,
    view::{
        AboutTemplate, CartTemplate, ContactInfo, ContactTemplate, GalleryTemplate, HomeTemplate,
        MenuCategoryView, MenuTemplate, ReceiptTemplate, ReceiptView, render,
    },
};
use axum::{
    Router,
    extract::{Extension, Query},
    response::Html,
    routing::get,
};
use serde::Deserialize;
use shared::errors::{HttpError, ServiceError};
use std::sync::Arc;
use tracing::warn;

const RECEIPT_NOT_FOUND: &str =
    "Detail pesanan tidak ditemukan. Mungkin sudah kadaluarsa atau ID tidak valid.";

#[derive(Debug, Default, Deserialize)]
pub struct ReceiptQuery {
    pub order_id: Option<String>,
}

pub async fn home_page() -> Result<Html<String>, HttpError> {
    render(&HomeTemplate {
        title: "Kopi Asik - Beranda",
    })
}

pub async fn menu_page(
    Extension(service): Extension<DynMenuService>,
) -> Result<Html<String>, HttpError> {
    let categories = service
        .group_by_category()
        .iter()
        .map(MenuCategoryView::from)
        .collect();

    render(&MenuTemplate {
        title: "Kopi Asik - Menu",
        categories,
    })
}

pub async fn about_page() -> Result<Html<String>, HttpError> {
    render(&AboutTemplate {
        title: "Kopi Asik - Tentang Kami",
    })
}

pub async fn gallery_page() -> Result<Html<String>, HttpError> {
    render(&GalleryTemplate {
        title: "Kopi Asik - Galeri",
    })
}

pub async fn contact_page() -> Result<Html<String>, HttpError> {
    render(&ContactTemplate {
        title: "Kopi Asik - Kontak",
        info: ContactInfo::CAFE,
    })
}

pub async fn cart_page() -> Result<Html<String>, HttpError> {
    render(&CartTemplate {
        title: "Kopi Asik - Keranjang Belanja",
    })
}

/// An unknown or missing `order_id` still renders the page, with a message
/// in place of the receipt.
pub async fn receipt_page(
    Extension(service): Extension<DynOrderService>,
    Query(params): Query<ReceiptQuery>,
) -> Result<Html<String>, HttpError> {
    let order_id = params.order_id.unwrap_or_default();

    let receipt = if order_id.trim().is_empty() {
        None
    } else {
        match service.find_by_id(&order_id).await {
            Ok(order) => Some(ReceiptView::from(order)),
            Err(ServiceError::OrderNotFound(id)) => {
                warn!(order_id = %id, "Receipt requested for unknown order");
                None
            }
            Err(e) => return Err(e.into()),
        }
    };

    render(&ReceiptTemplate {
        title: "Kopi Asik - Struk Pembelian",
        receipt,
        message: RECEIPT_NOT_FOUND,
    })
}

pub fn page_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/menu", get(menu_page))
        .route("/about", get(about_page))
        .route("/gallery", get(gallery_page))
        .route("/contact", get(contact_page))
        .route("/cart", get(cart_page))
        .route("/receipt", get(receipt_page))
        .layer(Extension(app_state.di_container.menu_service.clone()))
        .layer(Extension(app_state.di_container.order_service.clone()))
}
