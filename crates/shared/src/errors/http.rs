use crate::errors::{error::ErrorResponse, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidRequest(_) => HttpError::BadRequest("Permintaan tidak valid".into()),
            ServiceError::MenuItemNotFound(_) => {
                HttpError::NotFound("Item menu tidak ditemukan".into())
            }
            ServiceError::CartItemNotFound(_) => {
                HttpError::NotFound("Item tidak ditemukan di keranjang".into())
            }
            ServiceError::OrderNotFound(_) => {
                HttpError::NotFound("Detail pesanan tidak ditemukan".into())
            }
            ServiceError::EmptyCart => HttpError::BadRequest("Keranjang belanja kosong.".into()),
            ServiceError::InvalidInput(msg) => HttpError::BadRequest(msg),
            ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            error: msg,
        });

        (status, body).into_response()
    }
}
