use log::info;

use crate::application::dtos::StreakDto;
use unibuddy_domain::activity::ActivityLogRepository;
use unibuddy_domain::shared::{Clock, DomainError};
use unibuddy_domain::streak::compute_streaks;

/// Compute streak statistics from the activity log.
pub async fn get_streak_stats(
    activity_repo: &dyn ActivityLogRepository,
    clock: &dyn Clock,
) -> Result<StreakDto, DomainError> {
    let log = activity_repo.load().await?;
    let dates = log.activity_dates();
    let summary = compute_streaks(&dates, clock.today());

    let dto = StreakDto {
        current_streak: summary.current_streak,
        longest_streak: summary.longest_streak,
        total_activity_days: summary.total_activity_days,
        last_activity_date: summary
            .last_activity_date
            .map(|d| d.format("%Y-%m-%d").to_string()),
    };

    info!(
        "[streak] get_streak_stats current={} longest={} total_days={}",
        dto.current_streak, dto.longest_streak, dto.total_activity_days
    );

    Ok(dto)
}
