use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct ContactRequest {
    #[validate(length(max = 200))]
    pub name: String,
    #[validate(length(max = 200))]
    pub email: String,
    #[validate(length(max = 200))]
    pub subject: String,
    #[validate(length(max = 5000))]
    pub message: String,
}
