//! Clean Service - remove build output and generated project files.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{Filesystem, WorkspaceStore},
        services::load_workspace,
    },
    error::GenesisResult,
};

/// Build output directories removed wholesale.
pub const OUTPUT_DIRS: [&str; 2] = ["bin", "bin-int"];

/// Suffixes of files produced by project generation.
pub const GENERATED_SUFFIXES: [&str; 4] = [".vcxproj", ".vcxproj.user", ".vcxproj.filters", ".sln"];

/// What a clean run removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub removed: Vec<PathBuf>,
}

/// Service that deletes build artifacts.
pub struct CleanService {
    store: Box<dyn WorkspaceStore>,
    filesystem: Box<dyn Filesystem>,
    root: PathBuf,
}

impl CleanService {
    pub fn new(
        store: Box<dyn WorkspaceStore>,
        filesystem: Box<dyn Filesystem>,
        root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store,
            filesystem,
            root: root.into(),
        }
    }

    /// Whether `path` looks like a generated project file.
    pub fn is_generated(path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| GENERATED_SUFFIXES.iter().any(|s| name.ends_with(s)))
    }

    /// Remove `bin/`, `bin-int/`, the workspace solution, and generated
    /// project files below every top-level project directory.
    ///
    /// Sources, override stubs, and installed modules are left alone.
    #[instrument(skip_all, fields(root = %self.root.display()))]
    pub fn clean(&self) -> GenesisResult<CleanReport> {
        let document = load_workspace(self.store.as_ref())?;
        let mut report = CleanReport::default();

        for dir in OUTPUT_DIRS {
            let path = self.root.join(dir);
            if self.filesystem.exists(&path) {
                info!(path = %path.display(), "Removing");
                self.filesystem.remove_dir_all(&path)?;
                report.removed.push(path);
            }
        }

        let solution = self.root.join(format!("{}.sln", document.name));
        if self.filesystem.exists(&solution) {
            self.filesystem.remove_file(&solution)?;
            report.removed.push(solution);
        }

        for key in document.projects.keys() {
            for file in self.filesystem.list_files(&self.root.join(key))? {
                if Self::is_generated(&file) {
                    debug!(path = %file.display(), "Removed");
                    self.filesystem.remove_file(&file)?;
                    report.removed.push(file);
                }
            }
        }

        info!(removed = report.removed.len(), "Clean finished");
        Ok(report)
    }
}
