//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `genesis-adapters` crate provides implementations.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::WorkspaceDocument;
use crate::error::GenesisResult;

/// Port for the persisted workspace description.
///
/// Implemented by:
/// - `genesis_adapters::store::JsonFileStore` (production)
/// - `genesis_adapters::store::MemoryStore` (testing)
///
/// Every `load` returns a fresh, owned snapshot; callers never share a
/// document across operations.
pub trait WorkspaceStore: Send + Sync {
    /// Whether a workspace document exists.
    fn exists(&self) -> bool;

    /// Read the whole document.
    fn load(&self) -> GenesisResult<WorkspaceDocument>;

    /// Replace the whole document.
    fn save(&self, document: &WorkspaceDocument) -> GenesisResult<()>;

    /// Where the document lives, for messages.
    fn location(&self) -> PathBuf;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `genesis_adapters::filesystem::LocalFilesystem` (production)
/// - `genesis_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> GenesisResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> GenesisResult<()>;

    /// Read a whole file.
    fn read_file(&self, path: &Path) -> GenesisResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> GenesisResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> GenesisResult<()>;

    /// Every file below `dir`, recursively. Empty when `dir` is missing.
    fn list_files(&self, dir: &Path) -> GenesisResult<Vec<PathBuf>>;
}

/// An external command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory; inherited when `None`.
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// How an external process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStatus {
    /// Exit code; `None` when terminated by a signal.
    pub code: Option<i32>,
}

impl ProcessStatus {
    pub const fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Port for running external tools.
///
/// Implementations run the command to completion with output streamed to the
/// user; there is no timeout and no cancellation. Failing to start the
/// program is an error; a non-zero exit is a [`ProcessStatus`].
#[cfg_attr(test, mockall::automock)]
pub trait ProcessRunner: Send + Sync {
    fn run(&self, command: &CommandSpec) -> GenesisResult<ProcessStatus>;
}

// Shared adapters: lets one filesystem or runner back several services.

impl<T: WorkspaceStore + ?Sized> WorkspaceStore for Arc<T> {
    fn exists(&self) -> bool {
        (**self).exists()
    }

    fn load(&self) -> GenesisResult<WorkspaceDocument> {
        (**self).load()
    }

    fn save(&self, document: &WorkspaceDocument) -> GenesisResult<()> {
        (**self).save(document)
    }

    fn location(&self) -> PathBuf {
        (**self).location()
    }
}

impl<T: Filesystem + ?Sized> Filesystem for Arc<T> {
    fn create_dir_all(&self, path: &Path) -> GenesisResult<()> {
        (**self).create_dir_all(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> GenesisResult<()> {
        (**self).write_file(path, content)
    }

    fn read_file(&self, path: &Path) -> GenesisResult<String> {
        (**self).read_file(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn remove_file(&self, path: &Path) -> GenesisResult<()> {
        (**self).remove_file(path)
    }

    fn remove_dir_all(&self, path: &Path) -> GenesisResult<()> {
        (**self).remove_dir_all(path)
    }

    fn list_files(&self, dir: &Path) -> GenesisResult<Vec<PathBuf>> {
        (**self).list_files(dir)
    }
}

impl<T: ProcessRunner + ?Sized> ProcessRunner for Arc<T> {
    fn run(&self, command: &CommandSpec) -> GenesisResult<ProcessStatus> {
        (**self).run(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_spec_displays_as_command_line() {
        let cmd = CommandSpec::new("git")
            .arg("clone")
            .arg("https://example/repo.git")
            .arg("./.genesis/modules/glfw");
        assert_eq!(
            cmd.to_string(),
            "git clone https://example/repo.git ./.genesis/modules/glfw"
        );
        assert!(cmd.cwd.is_none());
    }

    #[test]
    fn only_zero_exit_is_success() {
        assert!(ProcessStatus::exited(0).success());
        assert!(!ProcessStatus::exited(1).success());
        assert!(!ProcessStatus { code: None }.success());
    }
}
