pub mod activity_repo;
pub mod forum_repo;
pub mod profile_repo;
pub mod reminder_repo;

pub use activity_repo::InMemoryActivityLogRepository;
pub use forum_repo::InMemoryForumRepository;
pub use profile_repo::InMemoryProfileRepository;
pub use reminder_repo::InMemoryReminderRepository;
