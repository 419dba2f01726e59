//! Generate Service - dispatch a named generator.

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::{
    application::{
        Toolchain,
        generators::{
            GenerateOutcome, GeneratorContext, GeneratorInfo, GeneratorOptions, GeneratorRegistry,
        },
        ports::{Filesystem, ProcessRunner, WorkspaceStore},
        services::load_workspace,
    },
    error::GenesisResult,
};

/// Service that resolves a generator and runs it against a fresh snapshot.
pub struct GenerateService {
    store: Box<dyn WorkspaceStore>,
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn ProcessRunner>,
    toolchain: Toolchain,
    root: PathBuf,
    registry: GeneratorRegistry,
}

impl GenerateService {
    pub fn new(
        store: Box<dyn WorkspaceStore>,
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn ProcessRunner>,
        toolchain: Toolchain,
        root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store,
            filesystem,
            runner,
            toolchain,
            root: root.into(),
            registry: GeneratorRegistry::builtin(),
        }
    }

    /// Replace the built-in registry.
    pub fn with_registry(mut self, registry: GeneratorRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Every available generator.
    pub fn generators(&self) -> Vec<GeneratorInfo> {
        self.registry.list()
    }

    /// Run the generator called `name`.
    ///
    /// The name is resolved before the workspace is read, so an unknown name
    /// is reported even outside a workspace.
    #[instrument(skip(self, options))]
    pub fn generate(
        &self,
        name: &str,
        options: &GeneratorOptions,
    ) -> GenesisResult<GenerateOutcome> {
        let generator = self.registry.require(name)?;
        let workspace = load_workspace(self.store.as_ref())?.flatten()?;

        let ctx = GeneratorContext {
            workspace: &workspace,
            root: &self.root,
            filesystem: self.filesystem.as_ref(),
            runner: self.runner.as_ref(),
            toolchain: &self.toolchain,
        };

        let outcome = generator.generate(&ctx, options)?;
        info!(generator = generator.name(), success = outcome.is_success(), "Generator finished");
        Ok(outcome)
    }
}
