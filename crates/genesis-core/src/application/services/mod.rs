//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "add a project" or "install modules". Each
//! operation loads its own snapshot of the workspace; nothing is cached
//! between calls.

pub mod build_service;
pub mod clean_service;
pub mod generate_service;
pub mod install_service;
pub mod workspace_service;

pub use build_service::{BuildReport, BuildService};
pub use clean_service::{CleanReport, CleanService};
pub use generate_service::GenerateService;
pub use install_service::{FailedInstall, InstallReport, InstallService};
pub use workspace_service::{ModuleRegistration, ProjectRegistration, WorkspaceService};

use crate::{
    application::{ApplicationError, ports::WorkspaceStore},
    domain::WorkspaceDocument,
    error::GenesisResult,
};

/// Load the document, reporting a missing one as `WorkspaceNotFound`.
pub(crate) fn load_workspace(store: &dyn WorkspaceStore) -> GenesisResult<WorkspaceDocument> {
    if !store.exists() {
        return Err(ApplicationError::WorkspaceNotFound {
            path: store.location(),
        }
        .into());
    }
    store.load()
}
