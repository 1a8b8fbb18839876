use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddToCartRequest {
    #[validate(length(min = 1, message = "ID item tidak boleh kosong."))]
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCartRequest {
    #[validate(length(min = 1, message = "ID item tidak boleh kosong."))]
    pub id: String,

    /// Zero or less removes the entry.
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RemoveCartRequest {
    #[validate(length(min = 1, message = "ID item tidak boleh kosong."))]
    pub id: String,
}
