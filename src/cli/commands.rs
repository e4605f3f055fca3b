//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "course-registry")]
#[command(about = "Register students for courses and keep the records in a JSON file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Storage file (default: Enrollments.json in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}
