use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::profile::User;
use crate::shared::{DomainError, MessageId};

/// One message in the shared forum. How messages reach other clients is not
/// this crate's concern; this is the store the forum screen reads from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumMessage {
    id: MessageId,
    text: String,
    author: User,
    created_at: DateTime<Utc>,
}

impl ForumMessage {
    pub fn new(text: &str, author: User, created_at: DateTime<Utc>) -> Result<Self, DomainError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::Validation(
                "Message cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id: MessageId::new(),
            text: text.to_string(),
            author,
            created_at,
        })
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn author(&self) -> &User {
        &self.author
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
