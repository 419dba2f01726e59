//! Workspace Service - create and edit `genesis.json`.
//!
//! Every mutation follows the same shape: load a fresh snapshot, apply the
//! change to it, save the whole document back.

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError, ports::WorkspaceStore, services::load_workspace,
    },
    domain::{
        DomainValidator as validator, FlatWorkspace, Library, Module, Packet, Project,
        ProjectKind, WorkspaceDocument, composite_id,
    },
    error::GenesisResult,
};

/// Default include directory offered for a new module.
pub const DEFAULT_MODULE_INCLUDE: &str = "include/";

/// Input for [`WorkspaceService::add_project`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRegistration {
    pub group: String,
    pub name: String,
    pub kind: ProjectKind,
    /// Add `%{wks.location}/<group>/src/<name>/` as an include directory.
    pub with_includes: bool,
}

impl ProjectRegistration {
    pub fn new(group: impl Into<String>, name: impl Into<String>, kind: ProjectKind) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            kind,
            with_includes: true,
        }
    }

    pub fn without_includes(mut self) -> Self {
        self.with_includes = false;
        self
    }

    /// The project's own source directory as a premake path template.
    pub fn include_dir(&self) -> String {
        format!("%{{wks.location}}/{}/src/{}/", self.group, self.name)
    }

    fn into_project(self) -> Project {
        let include = self.with_includes.then(|| self.include_dir());
        let mut project = Project::new(self.kind);
        if let Some(dir) = include {
            project = project.with_include_dir(dir);
        }
        project
    }
}

/// Input for [`WorkspaceService::add_module`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRegistration {
    pub name: String,
    /// Git repository cloned by `install`.
    pub repo: Option<String>,
    /// Comma-separated include directories.
    pub includes: String,
    /// Premake script wiring the module in; defaults to
    /// `%{wks.location}/.genesis/<name>.lua`.
    pub script: Option<String>,
}

impl ModuleRegistration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            repo: None,
            includes: DEFAULT_MODULE_INCLUDE.into(),
            script: None,
        }
    }

    pub fn with_repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = Some(repo.into());
        self
    }

    pub fn with_includes(mut self, includes: impl Into<String>) -> Self {
        self.includes = includes.into();
        self
    }

    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script = Some(script.into());
        self
    }

    /// Script path used when none was given.
    pub fn default_script(name: &str) -> String {
        format!("%{{wks.location}}/.genesis/{name}.lua")
    }

    fn into_module(self) -> Module {
        let script = self
            .script
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::default_script(&self.name));
        let mut module = Module::premake()
            .with_includes(&self.includes)
            .with_library(Library::premake(script));
        if let Some(repo) = self.repo {
            module = module.with_packet(Packet::git_clone(repo));
        }
        module
    }
}

/// Service for workspace document operations.
pub struct WorkspaceService {
    store: Box<dyn WorkspaceStore>,
}

impl WorkspaceService {
    pub fn new(store: Box<dyn WorkspaceStore>) -> Self {
        Self { store }
    }

    /// Whether a workspace document exists.
    pub fn exists(&self) -> bool {
        self.store.exists()
    }

    /// Create an empty workspace named `name`.
    ///
    /// An existing document is only replaced when `force` is set.
    #[instrument(skip(self))]
    pub fn init(&self, name: &str, force: bool) -> GenesisResult<WorkspaceDocument> {
        let name = name.trim();
        validator::validate_identifier(name)?;

        if self.store.exists() && !force {
            return Err(ApplicationError::WorkspaceExists {
                path: self.store.location(),
            }
            .into());
        }

        let document = WorkspaceDocument::new(name);
        self.store.save(&document)?;
        info!(workspace = name, "Workspace initialized");
        Ok(document)
    }

    /// Register a project inside a group. Returns its flattened identifier.
    #[instrument(
        skip_all,
        fields(group = %registration.group, project = %registration.name)
    )]
    pub fn add_project(&self, registration: ProjectRegistration) -> GenesisResult<String> {
        validator::validate_identifier(&registration.group)?;
        validator::validate_identifier(&registration.name)?;

        let mut document = load_workspace(self.store.as_ref())?;
        let id = composite_id(&registration.group, &registration.name);
        let group = registration.group.clone();
        let name = registration.name.clone();

        document.add_project(&group, &name, registration.into_project())?;
        self.store.save(&document)?;

        info!(id = %id, "Project added");
        Ok(id)
    }

    /// Register a top-level module.
    #[instrument(skip_all, fields(module = %registration.name))]
    pub fn add_module(&self, registration: ModuleRegistration) -> GenesisResult<()> {
        validator::validate_identifier(&registration.name)?;

        let mut document = load_workspace(self.store.as_ref())?;
        let name = registration.name.clone();

        document.add_module(&name, registration.into_module())?;
        self.store.save(&document)?;

        info!("Module added");
        Ok(())
    }

    /// Read the current document.
    pub fn load(&self) -> GenesisResult<WorkspaceDocument> {
        load_workspace(self.store.as_ref())
    }

    /// Read and flatten the current document.
    pub fn flatten(&self) -> GenesisResult<FlatWorkspace> {
        Ok(self.load()?.flatten()?)
    }
}
