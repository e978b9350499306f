use async_trait::async_trait;

use super::ForumMessage;
use crate::shared::DomainError;

/// Forum message store.
#[async_trait]
pub trait ForumRepository: Send + Sync {
    /// Append a message.
    async fn save(&self, message: &ForumMessage) -> Result<(), DomainError>;

    /// All messages, oldest first.
    async fn find_all(&self) -> Result<Vec<ForumMessage>, DomainError>;
}
