// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod activity;
pub mod forum;
pub mod preferences;
pub mod profile;
pub mod reminder;
pub mod shared;
pub mod streak;

// Re-exports for convenience
pub use shared::{Clock, DomainError, MessageId, ReminderId, SystemClock, UserId};
