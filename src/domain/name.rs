//! Student name validation

use crate::error::{RegistryError, Result};
use std::fmt;

/// Which name is being validated; selects the error message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    First,
    Last,
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameField::First => write!(f, "First name"),
            NameField::Last => write!(f, "Last name"),
        }
    }
}

/// Trim `input` and accept it only if it is non-empty and made of letters.
pub fn validate_name(field: NameField, input: &str) -> Result<String> {
    let name = input.trim();

    if name.is_empty() || !name.chars().all(is_letter) {
        return Err(RegistryError::Validation(format!(
            "{} must contain only letters (no numbers or symbols).",
            field
        )));
    }

    Ok(name.to_string())
}

/// Alphabetic, excluding letter-numbers such as Roman numerals.
fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}
