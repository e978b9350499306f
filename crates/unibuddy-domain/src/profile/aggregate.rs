use serde::{Deserialize, Serialize};

use super::value_objects::{User, BRANCHES, STREAMS, SUBJECTS, YEARS};
use crate::shared::{DomainError, UserId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    user_id: UserId,
    name: String,
    subjects: Vec<String>,
    stream: String,
    branch: String,
    year: String,
}

impl Profile {
    pub fn new() -> Self {
        Self {
            user_id: UserId::new(),
            name: "Ritarshi Roy".to_string(),
            subjects: vec!["Physics".to_string()],
            stream: "B.Tech".to_string(),
            branch: "CE".to_string(),
            year: "III".to_string(),
        }
    }

    /// Apply an edited profile. Every field is validated against the form
    /// catalogs before anything is written, so a failed update leaves the
    /// profile untouched.
    pub fn update(
        &mut self,
        name: &str,
        subjects: Vec<String>,
        stream: &str,
        branch: &str,
        year: &str,
    ) -> Result<(), DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation(
                "Name cannot be empty".to_string(),
            ));
        }

        for subject in &subjects {
            validate_choice("subject", subject, SUBJECTS)?;
        }
        validate_choice("stream", stream, STREAMS)?;
        validate_choice("branch", branch, BRANCHES)?;
        validate_choice("year", year, YEARS)?;

        self.name = name.to_string();
        self.subjects = subjects;
        self.stream = stream.to_string();
        self.branch = branch.to_string();
        self.year = year.to_string();
        Ok(())
    }

    /// The user identity derived from this profile. The id is stable across
    /// renames; only the display name follows the profile.
    pub fn user(&self) -> User {
        User::new(self.user_id.clone(), self.name.clone())
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn stream(&self) -> &str {
        &self.stream
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn year(&self) -> &str {
        &self.year
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_choice(field: &str, value: &str, catalog: &[&str]) -> Result<(), DomainError> {
    if catalog.contains(&value) {
        Ok(())
    } else {
        Err(DomainError::Validation(format!(
            "Unknown {}: {}",
            field, value
        )))
    }
}
