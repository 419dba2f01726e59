//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `genesis-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `WorkspaceStore`: `genesis.json` load/save
//!   - `Filesystem`: File operations
//!   - `ProcessRunner`: External tool invocation
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{CommandSpec, Filesystem, ProcessRunner, ProcessStatus, WorkspaceStore};

#[cfg(test)]
pub use output::MockProcessRunner;
