use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::error;
use validator::{Validate, ValidationErrors};

/// JSON body extractor that also runs `validator` rules.
///
/// Both kinds of rejection become a 400 with an `error` field, matching the
/// body of `HttpError`.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, axum::Json<Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                error!("❌ Rejected request body: {}", rejection.body_text());
                let payload = json!({
                    "status": "error",
                    "error": "Permintaan tidak valid",
                    "details": rejection.body_text(),
                });
                (StatusCode::BAD_REQUEST, axum::Json(payload))
            })?;

        value.validate().map_err(|validation_errors| {
            let payload = json!({
                "status": "error",
                "error": format_validation_errors(&validation_errors),
                "details": format_validation_errors_detailed(&validation_errors),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload))
        })?;

        Ok(Self(value))
    }
}

fn error_message(field: &str, error: &validator::ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| match error.code.as_ref() {
            "length" => format!("{field}: invalid length"),
            "range" => format!("{field}: value out of range"),
            _ => format!("Invalid {field}"),
        })
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let messages: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors
                .iter()
                .map(move |e| error_message(&field, e))
        })
        .collect();

    if messages.is_empty() {
        "Permintaan tidak valid".to_string()
    } else {
        messages.join(" ")
    }
}

fn format_validation_errors_detailed(errors: &ValidationErrors) -> Value {
    let mut error_map = serde_json::Map::new();

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| error_message(&field, e))
            .collect();
        error_map.insert(field.to_string(), json!(messages));
    }

    Value::Object(error_map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requests::{CheckoutRequest, UpdateCartRequest};
    use axum::body::Body;

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/api/checkout")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn missing_checkout_field_reports_its_message() {
        let rejection =
            SimpleValidatedJson::<CheckoutRequest>::from_request(json_request(r#"{"paymentMethod":"Tunai"}"#), &())
                .await
                .err()
                .unwrap();

        assert_eq!(rejection.0, StatusCode::BAD_REQUEST);
        assert_eq!(rejection.1.0["error"], "Nama Pelanggan tidak boleh kosong.");
    }

    #[tokio::test]
    async fn malformed_json_is_a_bad_request() {
        let rejection =
            SimpleValidatedJson::<UpdateCartRequest>::from_request(json_request("{\"id\":"), &())
                .await
                .err()
                .unwrap();

        assert_eq!(rejection.0, StatusCode::BAD_REQUEST);
        assert_eq!(rejection.1.0["error"], "Permintaan tidak valid");
    }

    #[tokio::test]
    async fn wrong_field_type_is_a_bad_request() {
        let rejection = SimpleValidatedJson::<UpdateCartRequest>::from_request(
            json_request(r#"{"id":"coffee-latte","quantity":"two"}"#),
            &(),
        )
        .await
        .err()
        .unwrap();

        assert_eq!(rejection.0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn valid_body_passes_through() {
        let SimpleValidatedJson(req) = SimpleValidatedJson::<CheckoutRequest>::from_request(
            json_request(r#"{"customerName":"Budi","paymentMethod":"QRIS"}"#),
            &(),
        )
        .await
        .ok()
        .unwrap();

        assert_eq!(req.customer_name, "Budi");
        assert_eq!(req.payment_method, "QRIS");
    }
}
