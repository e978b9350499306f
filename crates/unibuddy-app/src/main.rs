mod application;
mod presentation;

use chrono::Datelike;

use presentation::state::AppState;
use unibuddy_domain::shared::{Clock, SystemClock};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_dir = dirs::data_dir().map(|d| d.join("unibuddy").join("logs"));

    match log_dir {
        Some(dir) => {
            if let Err(e) = unibuddy_infrastructure::logging::init_logger(dir) {
                eprintln!("Failed to initialize file logging: {}", e);
                eprintln!("Falling back to console logging only");
                unibuddy_infrastructure::logging::init_console_logger();
            }
        }
        None => unibuddy_infrastructure::logging::init_console_logger(),
    }

    tracing::info!("UniBuddy starting...");

    let state = AppState::new().await?;
    tracing::info!(
        snapshot = %state.snapshot_store.path().display(),
        "App state initialized"
    );

    let streak = state.queries.streak.get_streak_stats().await?;
    tracing::info!(
        current_streak = streak.current_streak,
        longest_streak = streak.longest_streak,
        total_activity_days = streak.total_activity_days,
        last_activity_date = streak.last_activity_date.as_deref().unwrap_or("-"),
        "Streak summary"
    );

    let today = SystemClock.today();
    let calendar = state
        .queries
        .streak
        .get_calendar(today.year(), today.month())
        .await?;
    tracing::info!(
        month = %format!("{:04}-{:02}", calendar.year, calendar.month),
        active_days = calendar.month_stats.active_days,
        activity_rate = %format!("{:.1}%", calendar.month_stats.activity_rate),
        "Calendar summary"
    );

    state.save_snapshot().await?;
    tracing::info!("Snapshot saved");

    Ok(())
}
