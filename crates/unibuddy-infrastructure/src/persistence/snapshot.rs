use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use unibuddy_domain::activity::ActivityLog;
use unibuddy_domain::forum::ForumMessage;
use unibuddy_domain::preferences::Preferences;
use unibuddy_domain::profile::Profile;
use unibuddy_domain::reminder::Reminder;
use unibuddy_domain::shared::DomainError;

/// Everything the app keeps in memory, serialized as one JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateSnapshot {
    #[serde(default)]
    pub activity_log: ActivityLog,
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub reminders: Vec<Reminder>,
    #[serde(default)]
    pub messages: Vec<ForumMessage>,
}

/// Reads and writes the state snapshot file.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Snapshot location under the platform data directory.
    pub fn default_path() -> Result<PathBuf, DomainError> {
        let data_dir = dirs::data_dir().ok_or_else(|| {
            DomainError::Infrastructure("Could not resolve platform data directory".to_string())
        })?;
        Ok(data_dir.join("unibuddy").join("state.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot. A missing file is a normal first run and yields
    /// `None`; an unreadable or unparsable file is an error.
    pub fn load(&self) -> Result<Option<StateSnapshot>, DomainError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            DomainError::Infrastructure(format!(
                "Failed to read snapshot {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let snapshot = serde_json::from_str(&raw).map_err(|e| {
            DomainError::Serialization(format!(
                "Snapshot {} is not valid: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(Some(snapshot))
    }

    /// Persist the snapshot. Written to a sibling temp file first and renamed
    /// into place, so an interrupted save never truncates the previous one.
    pub fn save(&self, snapshot: &StateSnapshot) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DomainError::Infrastructure(format!(
                    "Failed to create snapshot directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| DomainError::Serialization(format!("Failed to encode snapshot: {}", e)))?;

        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json).map_err(|e| {
            DomainError::Infrastructure(format!(
                "Failed to write snapshot {}: {}",
                tmp_path.display(),
                e
            ))
        })?;
        std::fs::rename(&tmp_path, &self.path).map_err(|e| {
            DomainError::Infrastructure(format!(
                "Failed to replace snapshot {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(())
    }
}
