use crate::{
    abstract_trait::DynContactService,
    domain::{requests::ContactRequest, response::MessageResponse},
    middleware::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Json, extract::Extension, http::StatusCode, response::IntoResponse, routing::post,
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "Contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message received", body = MessageResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse)
    )
)]
pub async fn submit_contact(
    Extension(service): Extension<DynContactService>,
    SimpleValidatedJson(body): SimpleValidatedJson<ContactRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.submit(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn contact_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/contact", post(submit_contact))
        .layer(Extension(app_state.di_container.contact_service.clone()))
}
