use async_trait::async_trait;
use tokio::sync::RwLock;

use unibuddy_domain::activity::{ActivityLog, ActivityLogRepository};
use unibuddy_domain::shared::DomainError;

/// In-memory activity log store. The log lives in application state for the
/// lifetime of the process; durability comes from the state snapshot.
pub struct InMemoryActivityLogRepository {
    log: RwLock<ActivityLog>,
}

impl InMemoryActivityLogRepository {
    pub fn new() -> Self {
        Self {
            log: RwLock::new(ActivityLog::new()),
        }
    }

    pub fn with_log(log: ActivityLog) -> Self {
        Self {
            log: RwLock::new(log),
        }
    }
}

impl Default for InMemoryActivityLogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActivityLogRepository for InMemoryActivityLogRepository {
    async fn load(&self) -> Result<ActivityLog, DomainError> {
        Ok(self.log.read().await.clone())
    }

    async fn store(&self, log: &ActivityLog) -> Result<(), DomainError> {
        *self.log.write().await = log.clone();
        Ok(())
    }
}
