//! Runtime configuration

use crate::infrastructure::JsonFileRepository;
use std::path::PathBuf;

/// Storage file used when none is given on the command line
pub const DEFAULT_STORAGE_FILE: &str = "Enrollments.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub storage_file: PathBuf,
}

impl Settings {
    /// Build settings, falling back to [`DEFAULT_STORAGE_FILE`] in the working directory
    pub fn new(storage_file: Option<PathBuf>) -> Self {
        Settings {
            storage_file: storage_file.unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_FILE)),
        }
    }

    /// Repository backed by the configured storage file
    pub fn repository(&self) -> JsonFileRepository {
        JsonFileRepository::new(self.storage_file.clone())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::new(None)
    }
}
