use serde::{Deserialize, Serialize};

use unibuddy_domain::preferences::Preferences;
use unibuddy_domain::profile::{Profile, User};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDto {
    pub name: String,
    pub subjects: Vec<String>,
    pub stream: String,
    pub branch: String,
    pub year: String,
}

impl From<&Profile> for ProfileDto {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name().to_string(),
            subjects: profile.subjects().to_vec(),
            stream: profile.stream().to_string(),
            branch: profile.branch().to_string(),
            year: profile.year().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileInput {
    pub name: String,
    pub subjects: Vec<String>,
    pub stream: String,
    pub branch: String,
    pub year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub name: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.as_str().to_string(),
            name: user.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesDto {
    pub notifications_enabled: bool,
}

impl From<&Preferences> for PreferencesDto {
    fn from(preferences: &Preferences) -> Self {
        Self {
            notifications_enabled: preferences.notifications_enabled,
        }
    }
}
