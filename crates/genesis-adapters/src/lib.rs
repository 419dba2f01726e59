//! Infrastructure adapters for Genesis.
//!
//! This crate implements the ports defined in `genesis-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod process;
pub mod store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{RecordingRunner, SystemProcessRunner};
pub use store::{JsonFileStore, MemoryStore, WORKSPACE_FILE};
