//! Store implementations: JSON files on disk for production, an in-memory
//! store for tests and ephemeral sessions.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
