//! Application layer for Genesis.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (WorkspaceService, InstallService,
//!   CleanService, GenerateService, BuildService)
//! - **Generators**: The registry of artifact generators
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! workspace rules itself. Those live in `crate::domain`.

pub mod error;
pub mod generators;
pub mod ports;
pub mod services;
pub mod toolchain;

#[cfg(test)]
pub(crate) mod testing;

pub use services::{
    BuildReport, BuildService, CleanReport, CleanService, FailedInstall, GenerateService,
    InstallReport, InstallService, ModuleRegistration, ProjectRegistration, WorkspaceService,
};

pub use generators::{
    GenerateOutcome, Generator, GeneratorContext, GeneratorInfo, GeneratorOptions,
    GeneratorRegistry,
};

pub use ports::{CommandSpec, Filesystem, ProcessRunner, ProcessStatus, WorkspaceStore};

pub use error::ApplicationError;
pub use toolchain::Toolchain;
