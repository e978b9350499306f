mod aggregate;
mod repository;

#[cfg(test)]
mod aggregate_test;

pub use aggregate::ForumMessage;
pub use repository::ForumRepository;
