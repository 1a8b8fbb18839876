use crate::{
    abstract_trait::DynCartService,
    domain::{
        requests::{AddToCartRequest, RemoveCartRequest, UpdateCartRequest},
        response::{CartItemsResponse, MessageResponse},
    },
    middleware::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/add-to-cart",
    tag = "Cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Item added or its quantity incremented", body = MessageResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 404, description = "Menu item not found", body = ErrorResponse)
    )
)]
pub async fn add_to_cart(
    Extension(service): Extension<DynCartService>,
    SimpleValidatedJson(body): SimpleValidatedJson<AddToCartRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.add_to_cart(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/update-cart",
    tag = "Cart",
    request_body = UpdateCartRequest,
    responses(
        (status = 200, description = "Quantity updated, or entry removed when quantity <= 0", body = MessageResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 404, description = "Item not in cart", body = ErrorResponse)
    )
)]
pub async fn update_cart(
    Extension(service): Extension<DynCartService>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateCartRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_cart(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/remove-cart",
    tag = "Cart",
    request_body = RemoveCartRequest,
    responses(
        (status = 200, description = "Entry removed", body = MessageResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 404, description = "Item not in cart", body = ErrorResponse)
    )
)]
pub async fn remove_cart(
    Extension(service): Extension<DynCartService>,
    SimpleValidatedJson(body): SimpleValidatedJson<RemoveCartRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.remove_from_cart(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/cart-items",
    tag = "Cart",
    responses(
        (status = 200, description = "Current cart entries", body = CartItemsResponse)
    )
)]
pub async fn get_cart_items(
    Extension(service): Extension<DynCartService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_cart_items().await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn cart_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/add-to-cart", post(add_to_cart))
        .route("/api/update-cart", post(update_cart))
        .route("/api/remove-cart", post(remove_cart))
        .route("/api/cart-items", get(get_cart_items))
        .layer(Extension(app_state.di_container.cart_service.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::di::DependenciesInject;
    use axum::{body::to_bytes, response::Response};
    use prometheus_client::registry::Registry;
    use serde_json::Value;
    use tokio::sync::Mutex;

    async fn cart_service() -> DynCartService {
        DependenciesInject::new(Arc::new(Mutex::new(Registry::default())))
            .await
            .cart_service
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn add(id: &str) -> SimpleValidatedJson<AddToCartRequest> {
        SimpleValidatedJson(AddToCartRequest { id: id.into() })
    }

    #[tokio::test]
    async fn add_then_list() {
        let service = cart_service().await;

        let response = add_to_cart(Extension(service.clone()), add("coffee-espresso"))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await["message"],
            "'Espresso' berhasil ditambahkan ke keranjang!"
        );

        add_to_cart(Extension(service.clone()), add("coffee-espresso"))
            .await
            .into_response();

        let response = get_cart_items(Extension(service)).await.into_response();
        let body = body_json(response).await;
        let items = body["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["quantity"], 2);
        assert_eq!(items[0]["name"], "Espresso");
        assert_eq!(items[0]["category"], "Kopi");
    }

    #[tokio::test]
    async fn unknown_item_is_404_with_error_body() {
        let service = cart_service().await;

        let response = add_to_cart(Extension(service), add("coffee-unknown"))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Item menu tidak ditemukan");
    }

    #[tokio::test]
    async fn update_and_remove_of_missing_entry_are_404() {
        let service = cart_service().await;

        let response = update_cart(
            Extension(service.clone()),
            SimpleValidatedJson(UpdateCartRequest {
                id: "coffee-latte".into(),
                quantity: 2,
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await["error"],
            "Item tidak ditemukan di keranjang"
        );

        let response = remove_cart(
            Extension(service),
            SimpleValidatedJson(RemoveCartRequest {
                id: "coffee-latte".into(),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn empty_cart_lists_an_empty_array() {
        let service = cart_service().await;
        let response = get_cart_items(Extension(service)).await.into_response();
        assert_eq!(body_json(response).await["items"], serde_json::json!([]));
    }
}
