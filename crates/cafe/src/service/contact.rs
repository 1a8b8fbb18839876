use crate::{
    abstract_trait::ContactServiceTrait,
    domain::{requests::ContactRequest, response::MessageResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::info;

/// Contact messages are only logged; nothing is stored or forwarded.
#[derive(Debug, Default)]
pub struct ContactService;

impl ContactService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContactServiceTrait for ContactService {
    async fn submit(&self, req: &ContactRequest) -> Result<MessageResponse, ServiceError> {
        info!(
            name = %req.name,
            email = %req.email,
            subject = %req.subject,
            message = %req.message,
            "📨 Contact message received"
        );

        Ok(MessageResponse::new(
            "Pesan Anda telah berhasil dikirim! Kami akan segera merespons.",
        ))
    }
}
