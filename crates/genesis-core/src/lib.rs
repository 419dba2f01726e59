//! Genesis Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Genesis
//! workspace tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           genesis-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (WorkspaceService, GenerateService...) │
//! │   Generators (vscode, premake)          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Store, Filesystem, Process)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     genesis-adapters (Infrastructure)   │
//! │ (JsonFileStore, LocalFilesystem, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (WorkspaceDocument, FlatWorkspace)      │
//! │         No I/O                          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use genesis_core::prelude::*;
//!
//! # fn run(store: Box<dyn WorkspaceStore>) -> GenesisResult<()> {
//! let service = WorkspaceService::new(store);
//! service.init("Engine", false)?;
//! service.add_project(ProjectRegistration::new("Core", "Runtime", ProjectKind::StaticLib))?;
//!
//! let flat = service.flatten()?;
//! assert!(flat.projects.contains_key("Core-Runtime"));
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BuildService, CleanService, GenerateOutcome, GenerateService, GeneratorOptions,
        GeneratorRegistry, InstallService, ModuleRegistration, ProjectRegistration, Toolchain,
        WorkspaceService,
        ports::{CommandSpec, Filesystem, ProcessRunner, ProcessStatus, WorkspaceStore},
    };
    pub use crate::domain::{
        Architecture, BuildConfiguration, FlatWorkspace, Module, Project, ProjectKind,
        WorkspaceDocument,
    };
    pub use crate::error::{GenesisError, GenesisResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
