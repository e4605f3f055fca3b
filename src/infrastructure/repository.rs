//! File system repository for enrollment records

use crate::domain::EnrollmentRecord;
use crate::error::{RegistryError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Durable storage for the record collection
pub trait EnrollmentRepository {
    /// Location of the storage file
    fn path(&self) -> &Path;

    /// Read every stored record, in file order
    fn load(&self) -> Result<Vec<EnrollmentRecord>>;

    /// Replace the stored records with `records`
    fn save(&self, records: &[EnrollmentRecord]) -> Result<()>;
}

/// JSON file implementation of EnrollmentRepository.
///
/// The file holds a single array of `{FirstName, LastName, CourseName}`
/// objects, written with 2-space indentation.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: PathBuf) -> Self {
        JsonFileRepository { path }
    }

    /// Directory the storage file lives in
    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    fn open(&self) -> Result<File> {
        File::open(&self.path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                RegistryError::NotFound(self.path.clone())
            } else {
                RegistryError::Unknown(e)
            }
        })
    }
}

impl EnrollmentRepository for JsonFileRepository {
    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<EnrollmentRecord>> {
        let mut bytes = Vec::new();
        // The handle is dropped as soon as the content is read.
        self.open()?.read_to_end(&mut bytes)?;

        // Undecodable text is a read failure, not malformed JSON.
        let text = std::str::from_utf8(&bytes)
            .map_err(|e| RegistryError::Unknown(io::Error::new(io::ErrorKind::InvalidData, e)))?;

        let records: Vec<EnrollmentRecord> = serde_json::from_str(text)
            .map_err(|e| RegistryError::from_load(self.path.clone(), e))?;

        debug!(path = %self.path.display(), count = records.len(), "loaded enrollments");
        Ok(records)
    }

    fn save(&self, records: &[EnrollmentRecord]) -> Result<()> {
        // Written beside the target and renamed over it, so a failed save
        // leaves the previous file untouched. The temp file is removed on drop.
        let mut temp = NamedTempFile::new_in(self.parent_dir())?;

        {
            let mut writer = BufWriter::new(&mut temp);
            serde_json::to_writer_pretty(&mut writer, records)
                .map_err(RegistryError::from_save)?;
            writer.write_all(b"\n")?;
            // Unflushed bytes would be lost data, so a flush failure is an error.
            writer.flush()?;
        }

        if let Err(e) = temp.as_file().sync_all() {
            debug!(path = %self.path.display(), error = %e, "ignoring sync failure");
        }

        temp.persist(&self.path).map_err(|e| e.error)?;

        debug!(path = %self.path.display(), count = records.len(), "saved enrollments");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::fs;
    use tempfile::TempDir;

    fn repo_in(temp: &TempDir) -> JsonFileRepository {
        JsonFileRepository::new(temp.path().join("Enrollments.json"))
    }

    fn sample() -> Vec<EnrollmentRecord> {
        vec![
            EnrollmentRecord::new("Jane", "Doe", "History101"),
            EnrollmentRecord::new("Bob", "Smith", "Python 100"),
            EnrollmentRecord::new("Jane", "Doe", "History101"),
        ]
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let repo = repo_in(&temp);

        let err = repo.load().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_load_truncated_json() {
        let temp = TempDir::new().unwrap();
        let repo = repo_in(&temp);
        fs::write(repo.path(), r#"[{"FirstName": "Jane", "LastN"#).unwrap();

        let err = repo.load().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedData);
    }

    #[test]
    fn test_load_wrong_shape() {
        let temp = TempDir::new().unwrap();
        let repo = repo_in(&temp);

        fs::write(repo.path(), r#"{"FirstName": "Jane"}"#).unwrap();
        assert_eq!(repo.load().unwrap_err().kind(), ErrorKind::MalformedData);

        fs::write(repo.path(), r#"[{"FirstName": "Jane", "LastName": "Doe"}]"#).unwrap();
        assert_eq!(repo.load().unwrap_err().kind(), ErrorKind::MalformedData);
    }

    #[test]
    fn test_load_empty_file_is_malformed() {
        let temp = TempDir::new().unwrap();
        let repo = repo_in(&temp);
        fs::write(repo.path(), "").unwrap();

        assert_eq!(repo.load().unwrap_err().kind(), ErrorKind::MalformedData);
    }

    #[cfg(unix)]
    #[test]
    fn test_load_directory_is_unknown() {
        let temp = TempDir::new().unwrap();
        let repo = JsonFileRepository::new(temp.path().to_path_buf());

        assert_eq!(repo.load().unwrap_err().kind(), ErrorKind::Unknown);
    }

    #[test]
    fn test_load_invalid_utf8_is_unknown() {
        let temp = TempDir::new().unwrap();
        let repo = repo_in(&temp);
        fs::write(
            repo.path(),
            b"[{\"FirstName\":\"J\xffne\",\"LastName\":\"Doe\",\"CourseName\":\"Art\"}]",
        )
        .unwrap();

        let err = repo.load().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unknown);
        assert!(err.load_message().contains("non-specific"));
    }

    #[test]
    fn test_load_existing_file() {
        let temp = TempDir::new().unwrap();
        let repo = repo_in(&temp);
        fs::write(
            repo.path(),
            r#"[
  {"FirstName": "Bob", "LastName": "Smith", "CourseName": "Python 100"},
  {"FirstName": "Sue", "LastName": "Jones", "CourseName": "Python 100"}
]"#,
        )
        .unwrap();

        let records = repo.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], EnrollmentRecord::new("Bob", "Smith", "Python 100"));
        assert_eq!(records[1].first_name, "Sue");
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let repo = repo_in(&temp);

        repo.save(&sample()).unwrap();
        assert_eq!(repo.load().unwrap(), sample());
    }

    #[test]
    fn test_save_uses_two_space_indent_and_key_order() {
        let temp = TempDir::new().unwrap();
        let repo = repo_in(&temp);

        repo.save(&[EnrollmentRecord::new("Jane", "Doe", "History101")])
            .unwrap();

        let content = fs::read_to_string(repo.path()).unwrap();
        assert_eq!(
            content,
            "[\n  {\n    \"FirstName\": \"Jane\",\n    \"LastName\": \"Doe\",\n    \"CourseName\": \"History101\"\n  }\n]\n"
        );
    }

    #[test]
    fn test_save_empty_writes_empty_array() {
        let temp = TempDir::new().unwrap();
        let repo = repo_in(&temp);

        repo.save(&[]).unwrap();

        let content = fs::read_to_string(repo.path()).unwrap();
        assert_eq!(content.trim(), "[]");
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_overwrites_existing_content() {
        let temp = TempDir::new().unwrap();
        let repo = repo_in(&temp);

        repo.save(&sample()).unwrap();
        repo.save(&[EnrollmentRecord::new("Amy", "Lee", "Art")]).unwrap();

        let records = repo.load().unwrap();
        assert_eq!(records, vec![EnrollmentRecord::new("Amy", "Lee", "Art")]);
    }

    #[test]
    fn test_save_leaves_no_temporary_files() {
        let temp = TempDir::new().unwrap();
        let repo = repo_in(&temp);

        repo.save(&sample()).unwrap();
        repo.save(&sample()).unwrap();

        let names: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec!["Enrollments.json"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_save_keeps_previous_target() {
        let temp = TempDir::new().unwrap();
        // A non-empty directory cannot be replaced by the renamed file.
        let target = temp.path().join("Enrollments.json");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep.txt"), "previous").unwrap();
        let repo = JsonFileRepository::new(target.clone());

        let err = repo.save(&sample()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unknown);
        assert_eq!(fs::read_to_string(target.join("keep.txt")).unwrap(), "previous");
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_parent_dir_of_bare_file_name() {
        let repo = JsonFileRepository::new(PathBuf::from("Enrollments.json"));
        assert_eq!(repo.parent_dir(), Path::new("."));
    }

    #[test]
    fn test_save_into_missing_directory_is_unknown() {
        let temp = TempDir::new().unwrap();
        let repo = JsonFileRepository::new(temp.path().join("missing").join("Enrollments.json"));

        let err = repo.save(&sample()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unknown);
    }
}
