use tempfile::TempDir;

use unibuddy_infrastructure::persistence::SnapshotStore;
use unibuddy_lib::application::dtos::UpdateProfileInput;
use unibuddy_lib::presentation::state::AppState;

async fn state_at(dir: &TempDir) -> AppState {
    let store = SnapshotStore::new(dir.path().join("state.json"));
    AppState::with_snapshot_store(store)
        .await
        .expect("build app state")
}

#[tokio::test]
async fn e2e_activities_feed_streaks_and_survive_restart() {
    let dir = TempDir::new().expect("temp dir");

    // First session: record some activities and persist
    {
        let state = state_at(&dir).await;

        state
            .services
            .activity
            .add_activity("2025-07-14", "Lecture prep")
            .await
            .expect("add activity");
        state
            .services
            .activity
            .add_activity("2025-07-15", "Office hours")
            .await
            .expect("add activity");

        let streak = state.queries.streak.get_streak_stats().await.expect("streaks");
        assert_eq!(streak.total_activity_days, 2);
        assert_eq!(streak.longest_streak, 2);

        state.save_snapshot().await.expect("save snapshot");
    }

    // Second session: the schedule is hydrated from the snapshot
    {
        let state = state_at(&dir).await;

        let marked = state
            .services
            .activity
            .marked_dates()
            .await
            .expect("marked dates");
        assert_eq!(marked, vec!["2025-07-14", "2025-07-15"]);

        let streak = state.queries.streak.get_streak_stats().await.expect("streaks");
        assert_eq!(streak.longest_streak, 2);
        assert_eq!(streak.last_activity_date.as_deref(), Some("2025-07-15"));
    }
}

#[tokio::test]
async fn e2e_profile_preferences_and_forum_survive_restart() {
    let dir = TempDir::new().expect("temp dir");

    {
        let state = state_at(&dir).await;

        state
            .services
            .profile
            .update_profile(UpdateProfileInput {
                name: "Asha Rao".to_string(),
                subjects: vec!["Calculus".to_string(), "PPS".to_string()],
                stream: "B.Tech".to_string(),
                branch: "Data Science".to_string(),
                year: "II".to_string(),
            })
            .await
            .expect("update profile");

        state.services.settings.set_notifications_enabled(true).await;

        state
            .services
            .forum
            .post_message("Hello from the forum")
            .await
            .expect("post message");

        state.save_snapshot().await.expect("save snapshot");
    }

    {
        let state = state_at(&dir).await;

        let profile = state.services.profile.profile().await.expect("profile");
        assert_eq!(profile.name, "Asha Rao");
        assert_eq!(profile.branch, "Data Science");

        assert!(state.services.settings.preferences().await.notifications_enabled);

        let messages = state.services.forum.messages().await.expect("messages");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text, "Hello from the forum");
        assert_eq!(messages[0].author.name, "Asha Rao");
    }
}

#[tokio::test]
async fn e2e_first_run_without_snapshot_starts_empty() {
    let dir = TempDir::new().expect("temp dir");
    let state = state_at(&dir).await;

    let streak = state.queries.streak.get_streak_stats().await.expect("streaks");
    assert_eq!(streak.current_streak, 0);
    assert_eq!(streak.longest_streak, 0);

    let profile = state.services.profile.profile().await.expect("profile");
    assert_eq!(profile.name, "Ritarshi Roy");
}
