use crate::{
    abstract_trait::DynOrderService,
    domain::{
        requests::CheckoutRequest,
        response::{CheckoutResponse, OrderResponse},
    },
    middleware::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/checkout",
    tag = "Order",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Order placed and cart emptied", body = CheckoutResponse),
        (status = 400, description = "Empty cart or blank customer name / payment method", body = ErrorResponse)
    )
)]
pub async fn checkout(
    Extension(service): Extension<DynOrderService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CheckoutRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.checkout(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/{order_id}",
    tag = "Order",
    params(("order_id" = String, Path, description = "Order ID, e.g. ORD-1")),
    responses(
        (status = 200, description = "Order details", body = OrderResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    )
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderService>,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(&order_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/checkout", post(checkout))
        .route("/api/orders/{order_id}", get(get_order))
        .layer(Extension(app_state.di_container.order_service.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{di::DependenciesInject, domain::requests::AddToCartRequest};
    use axum::{body::to_bytes, response::Response};
    use prometheus_client::registry::Registry;
    use serde_json::Value;
    use tokio::sync::Mutex;

    async fn container() -> DependenciesInject {
        DependenciesInject::new(Arc::new(Mutex::new(Registry::default()))).await
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn checkout_body(name: &str, method: &str) -> SimpleValidatedJson<CheckoutRequest> {
        SimpleValidatedJson(CheckoutRequest {
            customer_name: name.into(),
            payment_method: method.into(),
        })
    }

    #[tokio::test]
    async fn checkout_returns_the_order() {
        let di = container().await;
        for id in ["coffee-espresso", "coffee-espresso", "food-croissant"] {
            di.cart_service
                .add_to_cart(&AddToCartRequest { id: id.into() })
                .await
                .unwrap();
        }

        let response = checkout(Extension(di.order_service.clone()), checkout_body("Budi", "QRIS"))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["orderID"], "ORD-1");
        assert_eq!(body["customerName"], "Budi");
        assert_eq!(body["order"]["totalAmount"], 68000.0);
        assert_eq!(body["order"]["items"].as_array().unwrap().len(), 2);
        assert!(body["message"].as_str().unwrap().contains("Keranjang Anda telah dikosongkan"));

        let response = get_order(Extension(di.order_service), Path("ORD-1".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["paymentMethod"], "QRIS");
    }

    #[tokio::test]
    async fn empty_cart_checkout_is_400() {
        let di = container().await;

        let response = checkout(Extension(di.order_service), checkout_body("Budi", "Tunai"))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Keranjang belanja kosong.");
    }

    #[tokio::test]
    async fn blank_payment_method_is_400() {
        let di = container().await;
        di.cart_service
            .add_to_cart(&AddToCartRequest {
                id: "coffee-mocha".into(),
            })
            .await
            .unwrap();

        let response = checkout(Extension(di.order_service), checkout_body("Budi", "  "))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "Metode pembayaran tidak boleh kosong."
        );
    }

    #[tokio::test]
    async fn unknown_order_is_404() {
        let di = container().await;
        let response = get_order(Extension(di.order_service), Path("ORD-42".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
