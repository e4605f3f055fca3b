//! Application layer - The in-memory record collection

pub mod store;

pub use store::RecordStore;
