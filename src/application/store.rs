//! Record store: the session's enrollment collection and its persistence

use crate::domain::EnrollmentRecord;
use crate::error::{RegistryError, Result};
use crate::infrastructure::{EnrollmentRepository, JsonFileRepository};
use std::path::Path;
use tracing::{debug, info};

/// Ordered, append-only collection of enrollment records for one session.
///
/// Changes stay in memory until [`RecordStore::save`] is called.
#[derive(Debug)]
pub struct RecordStore<R = JsonFileRepository> {
    repository: R,
    records: Vec<EnrollmentRecord>,
}

impl<R: EnrollmentRepository> RecordStore<R> {
    /// Create a store with no records
    pub fn empty(repository: R) -> Self {
        RecordStore {
            repository,
            records: Vec::new(),
        }
    }

    /// Load the store from its repository.
    ///
    /// A failed load still yields a usable, empty store; the failure is
    /// returned alongside it for the caller to report.
    pub fn load(repository: R) -> (Self, Option<RegistryError>) {
        match repository.load() {
            Ok(records) => (
                RecordStore {
                    repository,
                    records,
                },
                None,
            ),
            Err(e) => {
                info!(path = %repository.path().display(), error = %e, "starting with no enrollments");
                (RecordStore::empty(repository), Some(e))
            }
        }
    }

    /// Append a record. The store owns its copy.
    pub fn add(&mut self, record: EnrollmentRecord) {
        debug!(record = %record, "adding enrollment");
        self.records.push(record);
    }

    /// Current records in insertion order
    pub fn list(&self) -> &[EnrollmentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Location of the storage file
    pub fn path(&self) -> &Path {
        self.repository.path()
    }

    /// Write every record to the storage file, replacing its content
    pub fn save(&self) -> Result<()> {
        self.repository.save(&self.records).map_err(|e| {
            info!(path = %self.path().display(), error = %e, "save failed");
            e
        })
    }
}
