use serde::{Deserialize, Serialize};

use unibuddy_domain::reminder::Reminder;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderDto {
    pub id: String,
    pub date: String, // YYYY-MM-DD
}

impl From<&Reminder> for ReminderDto {
    fn from(reminder: &Reminder) -> Self {
        Self {
            id: reminder.id.as_str().to_string(),
            date: reminder.date.format("%Y-%m-%d").to_string(),
        }
    }
}
