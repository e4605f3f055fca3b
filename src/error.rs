//! Error types for course-registry

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the registration program
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Enrollment file not found: {0}")]
    NotFound(PathBuf),

    #[error("Malformed enrollment data in {path}: {source}")]
    MalformedData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    Validation(String),

    #[error("JSON serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Unknown(#[from] std::io::Error),
}

/// Fieldless view of [`RegistryError`], one entry per failure kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    MalformedData,
    Validation,
    Serialization,
    Unknown,
}

impl RegistryError {
    /// Classify a JSON error raised while reading `path`
    pub fn from_load(path: PathBuf, err: serde_json::Error) -> Self {
        if err.is_io() {
            RegistryError::Unknown(err.into())
        } else {
            RegistryError::MalformedData { path, source: err }
        }
    }

    /// Classify a JSON error raised while writing
    pub fn from_save(err: serde_json::Error) -> Self {
        if err.is_io() {
            RegistryError::Unknown(err.into())
        } else {
            RegistryError::Serialization(err)
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::NotFound(_) => ErrorKind::NotFound,
            RegistryError::MalformedData { .. } => ErrorKind::MalformedData,
            RegistryError::Validation(_) => ErrorKind::Validation,
            RegistryError::Serialization(_) => ErrorKind::Serialization,
            RegistryError::Unknown(_) => ErrorKind::Unknown,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RegistryError::Unknown(_) => 2,
            _ => 1,
        }
    }

    /// Headline shown to the user when loading the storage file fails
    pub fn load_message(&self) -> String {
        match self {
            RegistryError::NotFound(_) => {
                "The enrollment file must exist before running this script!".to_string()
            }
            RegistryError::MalformedData { .. } => {
                "The enrollment file contains invalid JSON data.".to_string()
            }
            _ => "There was a non-specific error while reading the file!".to_string(),
        }
    }

    /// Headline shown to the user when saving the storage file fails
    pub fn save_message(&self) -> String {
        match self {
            RegistryError::Serialization(_) => {
                "Please check that the data can be converted into valid JSON.".to_string()
            }
            _ => "There was an error while trying to save the data!".to_string(),
        }
    }

    /// Headline shown to the user when registering a student fails
    pub fn register_message(&self) -> String {
        match self {
            RegistryError::Validation(msg) => msg.clone(),
            _ => "There was a non-specific error while entering student data!".to_string(),
        }
    }
}

/// Result type using RegistryError
pub type Result<T> = std::result::Result<T, RegistryError>;
