use crate::domain::model::EmailPayload;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Outbound delivery of a contact message.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, payload: &EmailPayload) -> Result<()>;
}
