mod aggregate;
mod repository;

#[cfg(test)]
mod aggregate_test;

pub use aggregate::ActivityLog;
pub use repository::ActivityLogRepository;
