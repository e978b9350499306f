mod activity_service;
mod forum_service;
mod profile_service;
mod settings_service;

pub use activity_service::ActivityService;
pub use forum_service::ForumService;
pub use profile_service::ProfileService;
pub use settings_service::SettingsService;
