use async_trait::async_trait;

use super::Profile;
use crate::shared::DomainError;

/// Storage for the single profile owned by the application state.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn load(&self) -> Result<Profile, DomainError>;

    async fn store(&self, profile: &Profile) -> Result<(), DomainError>;
}
