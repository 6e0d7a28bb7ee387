use anyhow::Result;
use async_trait::async_trait;

use super::contact_message_entity::{ContactMessageEntity, NewContactMessage};

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn insert(&self, message: &NewContactMessage) -> Result<ContactMessageEntity>;

    /// Oldest first. No route reads messages back; the API tests use it.
    async fn list(&self) -> Result<Vec<ContactMessageEntity>>;
}
