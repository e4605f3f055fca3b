//! Output formatting utilities

use crate::domain::EnrollmentRecord;
use crate::error::RegistryError;

/// Menu text shown before every choice
pub const MENU: &str = "
---- Course Registration Program ----
  Select from the following menu:
    1. Register a Student for a Course
    2. Show current data
    3. Save data to a file
    4. Exit the program
-----------------------------------------
";

pub const CHOICE_PROMPT: &str = "What would you like to do: ";
pub const FIRST_NAME_PROMPT: &str = "Enter the student's first name: ";
pub const LAST_NAME_PROMPT: &str = "Enter the student's last name: ";
pub const COURSE_PROMPT: &str = "Please enter the name of the course: ";

pub const INVALID_CHOICE: &str = "Please only choose option 1, 2, 3, or 4.";
pub const FAREWELL: &str = "Program Ended.Thank you for your input. Have a Great Day!";

const SEPARATOR_WIDTH: usize = 50;

/// Format the registration confirmation
pub fn format_registered(record: &EnrollmentRecord) -> String {
    format!(
        "You have registered {} {} for {}.\n",
        record.first_name, record.last_name, record.course_name
    )
}

/// Format the current records for display
pub fn format_record_list(records: &[EnrollmentRecord]) -> String {
    if records.is_empty() {
        return "No registrations to display yet.\n".to_string();
    }

    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut output = String::new();
    output.push_str(&separator);
    output.push('\n');
    for record in records {
        output.push_str(&record.sentence());
        output.push('\n');
        output.push_str(&record.csv_line());
        output.push('\n');
    }
    output.push_str(&separator);
    output.push('\n');
    output
}

/// Format the echo printed after a successful save
pub fn format_saved(records: &[EnrollmentRecord]) -> String {
    let mut output = String::from("The following data was saved to file!\n\n");

    if records.is_empty() {
        output.push_str("(There were no registrations to save.)\n");
        return output;
    }

    for record in records {
        output.push_str(&record.csv_line());
        output.push('\n');
    }
    output
}

/// Format a failure report: headline, then the technical detail
pub fn format_failure(headline: &str, err: &RegistryError) -> String {
    format!(
        "{}\n\n-- Technical Error Message --\n{} ({:?})\n",
        headline,
        err,
        err.kind()
    )
}
