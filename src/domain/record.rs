//! Enrollment record model

use serde::{Deserialize, Serialize};
use std::fmt;

/// One student-course pairing.
///
/// Field order here is the key order written to the storage file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnrollmentRecord {
    pub first_name: String,
    pub last_name: String,
    pub course_name: String,
}

impl EnrollmentRecord {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        course_name: impl Into<String>,
    ) -> Self {
        EnrollmentRecord {
            first_name: first_name.into(),
            last_name: last_name.into(),
            course_name: course_name.into(),
        }
    }

    /// Human-readable sentence, e.g. "Student Jane Doe is enrolled in History101"
    pub fn sentence(&self) -> String {
        format!(
            "Student {} {} is enrolled in {}",
            self.first_name, self.last_name, self.course_name
        )
    }

    /// Comma-joined rendering of the three fields
    pub fn csv_line(&self) -> String {
        format!("{},{},{}", self.first_name, self.last_name, self.course_name)
    }
}

impl fmt::Display for EnrollmentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.first_name, self.last_name, self.course_name)
    }
}
