use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, ReminderId};

/// A reminder pinned to a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,
    pub date: NaiveDate,
}

impl Reminder {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: ReminderId::new(),
            date,
        }
    }
}

#[async_trait]
pub trait ReminderRepository: Send + Sync {
    async fn save(&self, reminder: &Reminder) -> Result<(), DomainError>;

    /// All reminders, earliest date first.
    async fn find_all(&self) -> Result<Vec<Reminder>, DomainError>;

    async fn delete(&self, id: &ReminderId) -> Result<(), DomainError>;
}
