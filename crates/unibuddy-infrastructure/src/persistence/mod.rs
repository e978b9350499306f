pub mod memory;
pub mod snapshot;

pub use memory::{
    InMemoryActivityLogRepository, InMemoryForumRepository, InMemoryProfileRepository,
    InMemoryReminderRepository,
};
pub use snapshot::{SnapshotStore, StateSnapshot};
