use chrono::{Datelike, NaiveDate};
use log::{info, warn};

use crate::application::dtos::{ActivityCalendarDto, ActivityDayDto, MonthStatsDto};
use crate::application::utils::parse_date;
use unibuddy_domain::activity::ActivityLogRepository;
use unibuddy_domain::shared::DomainError;

/// Activity calendar for a specific month
pub async fn get_calendar(
    activity_repo: &dyn ActivityLogRepository,
    year: i32,
    month: u32,
) -> Result<ActivityCalendarDto, DomainError> {
    // Validate inputs
    if !(1..=12).contains(&month) {
        return Err(DomainError::Validation("Invalid month".to_string()));
    }

    let first_day = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| DomainError::Validation("Invalid date".to_string()))?;

    let first_day_next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let last_day = first_day_next_month
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| DomainError::Validation("Invalid date".to_string()))?;

    let log = activity_repo.load().await?;

    let mut days = Vec::new();
    let mut active_days = 0u32;
    let mut total_activities = 0u32;

    let total_days = last_day.day();

    for day in 1..=total_days {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| DomainError::Validation("Invalid date".to_string()))?;
        let activities = log.activities_on(date).to_vec();
        let has_activity = !activities.is_empty();

        if has_activity {
            active_days += 1;
            total_activities += activities.len() as u32;
        }

        days.push(ActivityDayDto {
            date: date.format("%Y-%m-%d").to_string(),
            has_activity,
            activity_count: activities.len() as u32,
            activities,
        });
    }

    if active_days == 0 {
        warn!(
            "[streak] calendar query empty month={}",
            format!("{:04}-{:02}", year, month)
        );
    }

    let activity_rate = if total_days > 0 {
        (active_days as f64 / total_days as f64) * 100.0
    } else {
        0.0
    };

    let dto = ActivityCalendarDto {
        year,
        month,
        days,
        month_stats: MonthStatsDto {
            total_days,
            active_days,
            activity_rate,
            total_activities,
        },
    };

    info!(
        "[streak] calendar result month={:04}-{:02} active_days={} rate={:.2}% activities={}",
        year, month, dto.month_stats.active_days, dto.month_stats.activity_rate,
        dto.month_stats.total_activities
    );

    Ok(dto)
}

/// Details for a specific day
pub async fn get_day_detail(
    activity_repo: &dyn ActivityLogRepository,
    date: &str,
) -> Result<ActivityDayDto, DomainError> {
    let day = parse_date(date)?;
    let log = activity_repo.load().await?;
    let activities = log.activities_on(day).to_vec();

    Ok(ActivityDayDto {
        date: day.format("%Y-%m-%d").to_string(),
        has_activity: !activities.is_empty(),
        activity_count: activities.len() as u32,
        activities,
    })
}
