use std::sync::Arc;

use crate::application::queries::StreakQueries;
use crate::application::services::{
    ActivityService, ForumService, ProfileService, SettingsService,
};
use crate::presentation::state::{AppState, Queries, Repositories, Services};
use unibuddy_domain::profile::Profile;
use unibuddy_domain::shared::{DomainError, SystemClock};
use unibuddy_infrastructure::persistence::{
    InMemoryActivityLogRepository, InMemoryForumRepository, InMemoryProfileRepository,
    InMemoryReminderRepository, SnapshotStore, StateSnapshot,
};

/// Wire repositories, services and queries, hydrating from the snapshot when
/// one exists.
pub async fn build_app_state(snapshot_store: SnapshotStore) -> Result<AppState, DomainError> {
    let snapshot = snapshot_store.load()?.unwrap_or_default();
    let StateSnapshot {
        activity_log,
        profile,
        preferences,
        reminders,
        messages,
    } = snapshot;

    let repositories = Repositories {
        activity: Arc::new(InMemoryActivityLogRepository::with_log(activity_log)),
        profile: Arc::new(InMemoryProfileRepository::with_profile(
            profile.unwrap_or_else(Profile::new),
        )),
        forum: Arc::new(InMemoryForumRepository::with_messages(messages)),
        reminder: Arc::new(InMemoryReminderRepository::with_reminders(reminders)),
    };

    let clock = Arc::new(SystemClock);

    let services = Services {
        activity: Arc::new(ActivityService::new(
            repositories.activity.clone(),
            repositories.reminder.clone(),
        )),
        profile: Arc::new(ProfileService::new(repositories.profile.clone())),
        forum: Arc::new(ForumService::new(
            repositories.forum.clone(),
            repositories.profile.clone(),
            clock.clone(),
        )),
        settings: Arc::new(SettingsService::new(preferences)),
    };

    let queries = Queries {
        streak: Arc::new(StreakQueries::new(repositories.activity.clone(), clock)),
    };

    Ok(AppState {
        repositories,
        services,
        queries,
        snapshot_store,
    })
}
