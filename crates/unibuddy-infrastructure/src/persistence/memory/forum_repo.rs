use async_trait::async_trait;
use tokio::sync::RwLock;

use unibuddy_domain::forum::{ForumMessage, ForumRepository};
use unibuddy_domain::shared::DomainError;

pub struct InMemoryForumRepository {
    messages: RwLock<Vec<ForumMessage>>,
}

impl InMemoryForumRepository {
    pub fn new() -> Self {
        Self {
            messages: RwLock::new(Vec::new()),
        }
    }

    pub fn with_messages(messages: Vec<ForumMessage>) -> Self {
        Self {
            messages: RwLock::new(messages),
        }
    }
}

impl Default for InMemoryForumRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ForumRepository for InMemoryForumRepository {
    async fn save(&self, message: &ForumMessage) -> Result<(), DomainError> {
        self.messages.write().await.push(message.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<ForumMessage>, DomainError> {
        let mut messages = self.messages.read().await.clone();
        // Oldest first; ids break timestamp ties so the order is stable
        messages.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().as_str().cmp(b.id().as_str()))
        });
        Ok(messages)
    }
}
