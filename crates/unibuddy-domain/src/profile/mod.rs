mod aggregate;
mod repository;
mod value_objects;


pub use aggregate::Profile;
pub use repository::ProfileRepository;
pub use value_objects::{User, BRANCHES, STREAMS, SUBJECTS, YEARS};
