use crate::domain::{requests::ContactRequest, response::MessageResponse};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynContactService = Arc<dyn ContactServiceTrait + Send + Sync>;

#[async_trait]
pub trait ContactServiceTrait {
    async fn submit(&self, req: &ContactRequest) -> Result<MessageResponse, ServiceError>;
}
