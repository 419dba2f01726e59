//! Workspace store adapters.

mod json_file;
mod memory;

pub use json_file::{JsonFileStore, WORKSPACE_FILE};
pub use memory::MemoryStore;
