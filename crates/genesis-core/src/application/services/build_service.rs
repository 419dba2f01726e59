//! Build Service - compile the generated solution.

use std::path::PathBuf;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        Toolchain,
        ports::{CommandSpec, ProcessRunner, ProcessStatus, WorkspaceStore},
        services::load_workspace,
    },
    domain::{Architecture, BuildConfiguration},
    error::GenesisResult,
};

/// Result of one build invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub command: String,
    pub status: ProcessStatus,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.status.success()
    }
}

/// Service that drives msbuild on `<workspace>.sln`.
pub struct BuildService {
    store: Box<dyn WorkspaceStore>,
    runner: Box<dyn ProcessRunner>,
    toolchain: Toolchain,
    root: PathBuf,
}

impl BuildService {
    pub fn new(
        store: Box<dyn WorkspaceStore>,
        runner: Box<dyn ProcessRunner>,
        toolchain: Toolchain,
        root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store,
            runner,
            toolchain,
            root: root.into(),
        }
    }

    /// Build the solution for one architecture and configuration.
    ///
    /// Both are validated before the workspace is read or any process runs.
    /// A document that fails to flatten aborts the build.
    #[instrument(skip(self))]
    pub fn build(&self, architecture: &str, configuration: &str) -> GenesisResult<BuildReport> {
        let architecture: Architecture = architecture.parse()?;
        let configuration: BuildConfiguration = configuration.parse()?;
        let workspace = load_workspace(self.store.as_ref())?.flatten()?;

        let command = CommandSpec::new(&self.toolchain.msbuild)
            .arg(format!("{}.sln", workspace.name))
            .arg(format!("/p:Configuration={configuration}"))
            .arg(format!("/p:Platform={}", architecture.msbuild()))
            .current_dir(&self.root);

        info!(command = %command, "Building");
        let status = self.runner.run(&command)?;
        if !status.success() {
            warn!(code = ?status.code, "Build failed");
        }

        Ok(BuildReport {
            command: command.to_string(),
            status,
        })
    }
}
