// Infrastructure layer - Storage and logging behind the domain traits

pub mod logging;
pub mod persistence;
