use async_trait::async_trait;
use tokio::sync::RwLock;

use unibuddy_domain::reminder::{Reminder, ReminderRepository};
use unibuddy_domain::shared::{DomainError, ReminderId};

pub struct InMemoryReminderRepository {
    reminders: RwLock<Vec<Reminder>>,
}

impl InMemoryReminderRepository {
    pub fn new() -> Self {
        Self {
            reminders: RwLock::new(Vec::new()),
        }
    }

    pub fn with_reminders(reminders: Vec<Reminder>) -> Self {
        Self {
            reminders: RwLock::new(reminders),
        }
    }
}

impl Default for InMemoryReminderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReminderRepository for InMemoryReminderRepository {
    async fn save(&self, reminder: &Reminder) -> Result<(), DomainError> {
        self.reminders.write().await.push(reminder.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Reminder>, DomainError> {
        let mut reminders = self.reminders.read().await.clone();
        reminders.sort_by_key(|r| r.date);
        Ok(reminders)
    }

    async fn delete(&self, id: &ReminderId) -> Result<(), DomainError> {
        let mut reminders = self.reminders.write().await;
        let before = reminders.len();
        reminders.retain(|r| &r.id != id);
        if reminders.len() == before {
            return Err(DomainError::NotFound(format!("Reminder not found: {}", id)));
        }
        Ok(())
    }
}
