use std::sync::Arc;

use crate::application::dtos::{ActivityCalendarDto, ActivityDayDto, StreakDto};
use unibuddy_domain::activity::ActivityLogRepository;
use unibuddy_domain::shared::{Clock, DomainError};

mod calendar;
mod streak;


/// Read side of the activity log: streak statistics and calendar views.
pub struct StreakQueries {
    activity_repo: Arc<dyn ActivityLogRepository>,
    clock: Arc<dyn Clock>,
}

impl StreakQueries {
    pub fn new(activity_repo: Arc<dyn ActivityLogRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            activity_repo,
            clock,
        }
    }

    /// Current and longest streak over the whole activity history, evaluated
    /// against the clock's "today".
    pub async fn get_streak_stats(&self) -> Result<StreakDto, DomainError> {
        streak::get_streak_stats(self.activity_repo.as_ref(), self.clock.as_ref()).await
    }

    /// Activity calendar for a specific month
    pub async fn get_calendar(
        &self,
        year: i32,
        month: u32,
    ) -> Result<ActivityCalendarDto, DomainError> {
        calendar::get_calendar(self.activity_repo.as_ref(), year, month).await
    }

    /// Details for a specific day
    pub async fn get_day_detail(&self, date: &str) -> Result<ActivityDayDto, DomainError> {
        calendar::get_day_detail(self.activity_repo.as_ref(), date).await
    }
}
