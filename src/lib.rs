//! course-registry - Console course registration record keeper
//!
//! Registers students for courses through a fixed text menu and keeps the
//! enrollment records in a JSON file that is read at startup and written
//! on request.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::RegistryError;
