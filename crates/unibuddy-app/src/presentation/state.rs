use std::sync::Arc;

use crate::application::queries::StreakQueries;
use crate::application::services::{
    ActivityService, ForumService, ProfileService, SettingsService,
};
use unibuddy_domain::activity::ActivityLogRepository;
use unibuddy_domain::forum::ForumRepository;
use unibuddy_domain::profile::ProfileRepository;
use unibuddy_domain::reminder::ReminderRepository;
use unibuddy_domain::shared::DomainError;
use unibuddy_infrastructure::persistence::{SnapshotStore, StateSnapshot};

pub struct Repositories {
    pub activity: Arc<dyn ActivityLogRepository>,
    pub profile: Arc<dyn ProfileRepository>,
    pub forum: Arc<dyn ForumRepository>,
    pub reminder: Arc<dyn ReminderRepository>,
}

pub struct Services {
    pub activity: Arc<ActivityService>,
    pub profile: Arc<ProfileService>,
    pub forum: Arc<ForumService>,
    pub settings: Arc<SettingsService>,
}

pub struct Queries {
    pub streak: Arc<StreakQueries>,
}

/// The whole application state, passed by reference wherever it is needed.
pub struct AppState {
    pub repositories: Repositories,
    pub services: Services,
    pub queries: Queries,
    pub snapshot_store: SnapshotStore,
}

impl AppState {
    /// Build the state from the default snapshot location.
    pub async fn new() -> Result<Self, DomainError> {
        let store = SnapshotStore::new(SnapshotStore::default_path()?);
        crate::presentation::bootstrap::build_app_state(store).await
    }

    /// Build the state from an explicit snapshot path.
    pub async fn with_snapshot_store(store: SnapshotStore) -> Result<Self, DomainError> {
        crate::presentation::bootstrap::build_app_state(store).await
    }

    /// Collect the current in-memory state and persist it.
    pub async fn save_snapshot(&self) -> Result<(), DomainError> {
        let snapshot = StateSnapshot {
            activity_log: self.repositories.activity.load().await?,
            profile: Some(self.repositories.profile.load().await?),
            preferences: self.services.settings.current().await,
            reminders: self.repositories.reminder.find_all().await?,
            messages: self.repositories.forum.find_all().await?,
        };
        self.snapshot_store.save(&snapshot)
    }
}
