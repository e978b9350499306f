use log::info;
use std::sync::Arc;

use crate::application::dtos::{ProfileDto, UpdateProfileInput, UserDto};
use unibuddy_domain::profile::ProfileRepository;
use unibuddy_domain::shared::DomainError;

pub struct ProfileService {
    profile_repo: Arc<dyn ProfileRepository>,
}

impl ProfileService {
    pub fn new(profile_repo: Arc<dyn ProfileRepository>) -> Self {
        Self { profile_repo }
    }

    pub async fn profile(&self) -> Result<ProfileDto, DomainError> {
        let profile = self.profile_repo.load().await?;
        Ok(ProfileDto::from(&profile))
    }

    pub async fn update_profile(&self, input: UpdateProfileInput) -> Result<ProfileDto, DomainError> {
        let mut profile = self.profile_repo.load().await?;
        profile.update(
            &input.name,
            input.subjects,
            &input.stream,
            &input.branch,
            &input.year,
        )?;
        self.profile_repo.store(&profile).await?;

        info!("[profile] updated name={}", profile.name());
        Ok(ProfileDto::from(&profile))
    }

    /// The always-present user identity used for forum authorship.
    pub async fn current_user(&self) -> Result<UserDto, DomainError> {
        let profile = self.profile_repo.load().await?;
        Ok(profile.user().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unibuddy_infrastructure::persistence::InMemoryProfileRepository;

    fn service() -> ProfileService {
        ProfileService::new(Arc::new(InMemoryProfileRepository::new()))
    }

    fn input() -> UpdateProfileInput {
        UpdateProfileInput {
            name: "Asha Rao".to_string(),
            subjects: vec!["Calculus".to_string()],
            stream: "MBATech".to_string(),
            branch: "IT".to_string(),
            year: "II".to_string(),
        }
    }

    #[tokio::test]
    async fn test_default_profile_is_seeded() {
        let service = service();

        let profile = service.profile().await.unwrap();

        assert_eq!(profile.name, "Ritarshi Roy");
        assert_eq!(profile.subjects, vec!["Physics"]);
    }

    #[tokio::test]
    async fn test_update_profile_persists() {
        let service = service();

        service.update_profile(input()).await.unwrap();

        let profile = service.profile().await.unwrap();
        assert_eq!(profile.name, "Asha Rao");
        assert_eq!(profile.stream, "MBATech");
    }

    #[tokio::test]
    async fn test_update_with_invalid_branch_is_rejected() {
        let service = service();
        let mut bad = input();
        bad.branch = "Quantum".to_string();

        let result = service.update_profile(bad).await;

        assert!(result.is_err());
        assert_eq!(service.profile().await.unwrap().name, "Ritarshi Roy");
    }

    #[tokio::test]
    async fn test_current_user_follows_profile_name() {
        let service = service();
        let before = service.current_user().await.unwrap();

        service.update_profile(input()).await.unwrap();
        let after = service.current_user().await.unwrap();

        assert_eq!(before.id, after.id);
        assert_eq!(after.name, "Asha Rao");
    }
}
