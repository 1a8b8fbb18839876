use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutRequest {
    #[validate(length(min = 1, message = "Nama Pelanggan tidak boleh kosong."))]
    pub customer_name: String,

    #[validate(length(min = 1, message = "Metode pembayaran tidak boleh kosong."))]
    pub payment_method: String,
}
