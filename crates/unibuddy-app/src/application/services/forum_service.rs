use log::info;
use std::sync::Arc;

use crate::application::dtos::ForumMessageDto;
use unibuddy_domain::forum::{ForumMessage, ForumRepository};
use unibuddy_domain::profile::ProfileRepository;
use unibuddy_domain::shared::{Clock, DomainError};

/// The shared forum, minus any transport: messages are written to and read
/// from the local store. The author is always the current profile user.
pub struct ForumService {
    forum_repo: Arc<dyn ForumRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
    clock: Arc<dyn Clock>,
}

impl ForumService {
    pub fn new(
        forum_repo: Arc<dyn ForumRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            forum_repo,
            profile_repo,
            clock,
        }
    }

    pub async fn post_message(&self, text: &str) -> Result<ForumMessageDto, DomainError> {
        let profile = self.profile_repo.load().await?;
        let message = ForumMessage::new(text, profile.user(), self.clock.now())?;
        self.forum_repo.save(&message).await?;

        info!(
            "[forum] posted message id={} author={}",
            message.id(),
            message.author().name
        );
        Ok(ForumMessageDto::from(&message))
    }

    /// All messages, oldest first.
    pub async fn messages(&self) -> Result<Vec<ForumMessageDto>, DomainError> {
        let messages = self.forum_repo.find_all().await?;
        Ok(messages.iter().map(ForumMessageDto::from).collect())
    }
}
