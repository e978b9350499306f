use log::info;
use std::sync::Arc;

use crate::application::dtos::ReminderDto;
use crate::application::utils::parse_date;
use unibuddy_domain::activity::ActivityLogRepository;
use unibuddy_domain::reminder::{Reminder, ReminderRepository};
use unibuddy_domain::shared::{DomainError, ReminderId};

/// Write side of the schedule: activities and reminders.
pub struct ActivityService {
    activity_repo: Arc<dyn ActivityLogRepository>,
    reminder_repo: Arc<dyn ReminderRepository>,
}

impl ActivityService {
    pub fn new(
        activity_repo: Arc<dyn ActivityLogRepository>,
        reminder_repo: Arc<dyn ReminderRepository>,
    ) -> Self {
        Self {
            activity_repo,
            reminder_repo,
        }
    }

    /// Record an activity on the selected day.
    pub async fn add_activity(&self, date: &str, description: &str) -> Result<(), DomainError> {
        if date.trim().is_empty() {
            return Err(DomainError::Validation(
                "Please select a day to add an activity to".to_string(),
            ));
        }
        let day = parse_date(date)?;

        let mut log = self.activity_repo.load().await?;
        log.add_activity(day, description)?;
        self.activity_repo.store(&log).await?;

        info!("[activity] added activity date={}", day);
        Ok(())
    }

    pub async fn remove_activity(&self, date: &str, index: usize) -> Result<(), DomainError> {
        let day = parse_date(date)?;

        let mut log = self.activity_repo.load().await?;
        log.remove_activity(day, index)?;
        self.activity_repo.store(&log).await?;

        info!("[activity] removed activity date={} index={}", day, index);
        Ok(())
    }

    pub async fn activities_for(&self, date: &str) -> Result<Vec<String>, DomainError> {
        let day = parse_date(date)?;
        let log = self.activity_repo.load().await?;
        Ok(log.activities_on(day).to_vec())
    }

    /// Days with at least one activity, for calendar markers.
    pub async fn marked_dates(&self) -> Result<Vec<String>, DomainError> {
        let log = self.activity_repo.load().await?;
        Ok(log
            .activity_dates()
            .iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect())
    }

    pub async fn add_reminder(&self, date: &str) -> Result<ReminderDto, DomainError> {
        let day = parse_date(date)?;
        let reminder = Reminder::new(day);
        self.reminder_repo.save(&reminder).await?;

        info!("[activity] added reminder date={}", day);
        Ok(ReminderDto::from(&reminder))
    }

    pub async fn reminders(&self) -> Result<Vec<ReminderDto>, DomainError> {
        let reminders = self.reminder_repo.find_all().await?;
        Ok(reminders.iter().map(ReminderDto::from).collect())
    }

    pub async fn delete_reminder(&self, id: &str) -> Result<(), DomainError> {
        self.reminder_repo
            .delete(&ReminderId::from_string(id))
            .await?;

        info!("[activity] deleted reminder id={}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unibuddy_infrastructure::persistence::{
        InMemoryActivityLogRepository, InMemoryReminderRepository,
    };

    fn service() -> ActivityService {
        ActivityService::new(
            Arc::new(InMemoryActivityLogRepository::new()),
            Arc::new(InMemoryReminderRepository::new()),
        )
    }

    #[tokio::test]
    async fn test_add_and_list_activities() {
        let service = service();

        service.add_activity("2025-07-14", "Lecture prep").await.unwrap();
        service.add_activity("2025-07-14", "Office hours").await.unwrap();

        let activities = service.activities_for("2025-07-14").await.unwrap();
        assert_eq!(activities, vec!["Lecture prep", "Office hours"]);
        assert_eq!(service.marked_dates().await.unwrap(), vec!["2025-07-14"]);
    }

    #[tokio::test]
    async fn test_add_activity_without_selected_day_fails() {
        let service = service();

        let result = service.add_activity("  ", "Lecture prep").await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn test_add_empty_activity_fails() {
        let service = service();

        let result = service.add_activity("2025-07-14", "   ").await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(service.marked_dates().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_activity_rejects_malformed_date() {
        let service = service();

        let result = service.add_activity("14/07/2025", "Lecture prep").await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn test_remove_activity_unmarks_day() {
        let service = service();
        service.add_activity("2025-07-14", "only one").await.unwrap();

        service.remove_activity("2025-07-14", 0).await.unwrap();

        assert!(service.marked_dates().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reminder_lifecycle() {
        let service = service();

        let reminder = service.add_reminder("2025-07-20").await.unwrap();
        assert_eq!(service.reminders().await.unwrap().len(), 1);

        service.delete_reminder(&reminder.id).await.unwrap();
        assert!(service.reminders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_reminder_fails() {
        let service = service();

        let result = service.delete_reminder("missing").await;

        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }
}
