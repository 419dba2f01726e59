//! Wires the production adapters behind the core services.

use std::path::{Path, PathBuf};

use genesis_adapters::{JsonFileStore, LocalFilesystem, SystemProcessRunner};
use genesis_core::application::{
    BuildService, CleanService, GenerateService, InstallService, Toolchain, WorkspaceService,
};

use crate::{
    config::AppConfig,
    error::{CliResult, IntoCli},
};

/// The workspace rooted at the current directory, plus configured tools.
#[derive(Debug, Clone)]
pub struct Session {
    root: PathBuf,
    toolchain: Toolchain,
}

impl Session {
    /// Open the current directory.
    pub fn current(config: &AppConfig) -> CliResult<Self> {
        let root = std::env::current_dir()
            .with_cli_context(|| "Failed to read the current directory")?;
        Ok(Self {
            root,
            toolchain: config.toolchain(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn store(&self) -> Box<JsonFileStore> {
        Box::new(JsonFileStore::new(&self.root))
    }

    pub fn workspace(&self) -> WorkspaceService {
        WorkspaceService::new(self.store())
    }

    pub fn install(&self) -> InstallService {
        InstallService::new(
            self.store(),
            Box::new(LocalFilesystem::new()),
            Box::new(SystemProcessRunner::new()),
            self.toolchain.clone(),
            &self.root,
        )
    }

    pub fn clean(&self) -> CleanService {
        CleanService::new(self.store(), Box::new(LocalFilesystem::new()), &self.root)
    }

    pub fn generate(&self) -> GenerateService {
        GenerateService::new(
            self.store(),
            Box::new(LocalFilesystem::new()),
            Box::new(SystemProcessRunner::new()),
            self.toolchain.clone(),
            &self.root,
        )
    }

    pub fn build(&self) -> BuildService {
        BuildService::new(
            self.store(),
            Box::new(SystemProcessRunner::new()),
            self.toolchain.clone(),
            &self.root,
        )
    }
}
