use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::shared::DomainError;

/// The personal schedule: every calendar day maps to the activities recorded
/// on it.
///
/// A date is an "activity date" only while its list is non-empty. A key with
/// an empty list (possible after deserializing an edited snapshot) means the
/// same as an absent key, and never leaks out of [`ActivityLog::activity_dates`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityLog {
    entries: BTreeMap<NaiveDate, Vec<String>>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an activity on the given day.
    pub fn add_activity(&mut self, date: NaiveDate, description: &str) -> Result<(), DomainError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(DomainError::Validation(
                "Activity cannot be empty".to_string(),
            ));
        }

        self.entries
            .entry(date)
            .or_default()
            .push(description.to_string());
        Ok(())
    }

    /// Remove the activity at `index` on the given day. The date key is
    /// dropped once its last activity is removed.
    pub fn remove_activity(&mut self, date: NaiveDate, index: usize) -> Result<(), DomainError> {
        let activities = self.entries.get_mut(&date).ok_or_else(|| {
            DomainError::NotFound(format!("No activities recorded on {}", date))
        })?;

        if index >= activities.len() {
            return Err(DomainError::NotFound(format!(
                "No activity at index {} on {}",
                index, date
            )));
        }

        activities.remove(index);
        if activities.is_empty() {
            self.entries.remove(&date);
        }
        Ok(())
    }

    pub fn activities_on(&self, date: NaiveDate) -> &[String] {
        self.entries.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All days with at least one recorded activity, ascending.
    pub fn activity_dates(&self) -> Vec<NaiveDate> {
        self.entries
            .iter()
            .filter(|(_, activities)| !activities.is_empty())
            .map(|(date, _)| *date)
            .collect()
    }

    pub fn total_activity_days(&self) -> usize {
        self.entries
            .values()
            .filter(|activities| !activities.is_empty())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.total_activity_days() == 0
    }
}
