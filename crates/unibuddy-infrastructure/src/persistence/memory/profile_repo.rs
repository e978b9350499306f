use async_trait::async_trait;
use tokio::sync::RwLock;

use unibuddy_domain::profile::{Profile, ProfileRepository};
use unibuddy_domain::shared::DomainError;

pub struct InMemoryProfileRepository {
    profile: RwLock<Profile>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self {
            profile: RwLock::new(Profile::new()),
        }
    }

    pub fn with_profile(profile: Profile) -> Self {
        Self {
            profile: RwLock::new(profile),
        }
    }
}

impl Default for InMemoryProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn load(&self) -> Result<Profile, DomainError> {
        Ok(self.profile.read().await.clone())
    }

    async fn store(&self, profile: &Profile) -> Result<(), DomainError> {
        *self.profile.write().await = profile.clone();
        Ok(())
    }
}
