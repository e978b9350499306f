use log::info;
use tokio::sync::RwLock;

use crate::application::dtos::PreferencesDto;
use unibuddy_domain::preferences::Preferences;
use unibuddy_domain::shared::DomainError;

/// Settings screen state: the notifications switch and feedback submission.
pub struct SettingsService {
    preferences: RwLock<Preferences>,
}

impl SettingsService {
    pub fn new(preferences: Preferences) -> Self {
        Self {
            preferences: RwLock::new(preferences),
        }
    }

    pub async fn preferences(&self) -> PreferencesDto {
        PreferencesDto::from(&*self.preferences.read().await)
    }

    pub async fn set_notifications_enabled(&self, enabled: bool) {
        self.preferences.write().await.notifications_enabled = enabled;
        info!("[settings] notifications_enabled={}", enabled);
    }

    /// Accept a feedback note. There is no backend to forward it to; accepted
    /// feedback is recorded in the log.
    pub async fn submit_feedback(&self, text: &str) -> Result<(), DomainError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::Validation(
                "Please enter your feedback before submitting".to_string(),
            ));
        }

        info!("[settings] feedback submitted: {}", text);
        Ok(())
    }

    /// Current preferences for the state snapshot.
    pub async fn current(&self) -> Preferences {
        self.preferences.read().await.clone()
    }
}
