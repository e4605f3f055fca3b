//! Domain layer - Enrollment records and input rules

pub mod name;
pub mod record;

pub use name::{validate_name, NameField};
pub use record::EnrollmentRecord;
