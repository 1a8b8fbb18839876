mod cart;
mod contact;
mod order;
mod page;

use crate::state::AppState;
use anyhow::Result;
use axum::{
    Router,
    extract::{DefaultBodyLimit, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::get,
};
use prometheus_client::encoding::text::encode;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::cart::cart_routes;
pub use self::contact::contact_routes;
pub use self::order::order_routes;
pub use self::page::page_routes;

const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        cart::add_to_cart,
        cart::update_cart,
        cart::remove_cart,
        cart::get_cart_items,

        order::checkout,
        order::get_order,

        contact::submit_contact,
    ),
    tags(
        (name = "Cart", description = "Shopping cart endpoints"),
        (name = "Order", description = "Checkout and order lookup endpoints"),
        (name = "Contact", description = "Contact form endpoint"),
    )
)]
struct ApiDoc;

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    let mut buffer = String::new();

    let registry = state.registry.lock().await;

    if let Err(e) = encode(&mut buffer, &registry) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode metrics: {e}"),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        buffer,
    )
        .into_response()
}

pub struct AppRouter;

impl AppRouter {
    /// Pages, JSON API, static assets, swagger and metrics in one router.
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(cart_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()))
            .merge(contact_routes(shared_state.clone()));

        let (app_router, api) = api_router.split_for_parts();

        app_router
            .merge(page_routes(shared_state.clone()))
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
            .nest_service("/static", ServeDir::new(&shared_state.static_dir))
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn openapi_documents_every_json_endpoint() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/add-to-cart",
            "/api/update-cart",
            "/api/remove-cart",
            "/api/cart-items",
            "/api/checkout",
            "/api/orders/{order_id}",
            "/api/contact",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[tokio::test]
    async fn metrics_are_exposed_after_startup() {
        let config = Config::from_lookup(|_| None).unwrap();
        let state = Arc::new(AppState::new(&config).await);

        let response = metrics_handler(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("cart_service"));
        assert!(text.contains("# EOF"));
    }
}
