use async_trait::async_trait;

use super::ActivityLog;
use crate::shared::DomainError;

/// Storage for the single activity log owned by the application state.
#[async_trait]
pub trait ActivityLogRepository: Send + Sync {
    /// Load the current activity log.
    async fn load(&self) -> Result<ActivityLog, DomainError>;

    /// Replace the stored activity log.
    async fn store(&self, log: &ActivityLog) -> Result<(), DomainError>;
}
