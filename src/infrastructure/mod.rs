//! Infrastructure layer - Storage file and configuration

pub mod config;
pub mod repository;

pub use config::{Settings, DEFAULT_STORAGE_FILE};
pub use repository::{EnrollmentRepository, JsonFileRepository};
