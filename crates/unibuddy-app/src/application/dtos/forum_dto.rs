use serde::{Deserialize, Serialize};

use super::UserDto;
use unibuddy_domain::forum::ForumMessage;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumMessageDto {
    pub id: String,
    pub text: String,
    pub author: UserDto,
    pub created_at: String, // RFC 3339
}

impl From<&ForumMessage> for ForumMessageDto {
    fn from(message: &ForumMessage) -> Self {
        Self {
            id: message.id().as_str().to_string(),
            text: message.text().to_string(),
            author: message.author().clone().into(),
            created_at: message.created_at().to_rfc3339(),
        }
    }
}
