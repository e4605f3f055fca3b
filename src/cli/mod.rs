//! CLI layer - Arguments, menu loop and console output

pub mod commands;
pub mod menu;
pub mod output;
pub mod session;

pub use commands::Cli;
pub use menu::MenuChoice;
pub use session::Session;
