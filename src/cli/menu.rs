//! Main menu choices

use std::str::FromStr;

/// An option selected from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1. Register a Student for a Course
    Register,
    /// 2. Show current data
    Display,
    /// 3. Save data to a file
    Save,
    /// 4. Exit the program
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Register),
            "2" => Ok(MenuChoice::Display),
            "3" => Ok(MenuChoice::Save),
            "4" => Ok(MenuChoice::Exit),
            other => Err(format!("Invalid menu choice: '{}'", other)),
        }
    }
}
