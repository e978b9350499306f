use serde::{Deserialize, Serialize};

/// App-level preferences from the settings screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub notifications_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            notifications_enabled: false,
        }
    }
}
