//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use genesis_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{GenesisError, GenesisResult},
};
use walkdir::WalkDir;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> GenesisResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> GenesisResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_file(&self, path: &Path) -> GenesisResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_file(&self, path: &Path) -> GenesisResult<()> {
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }

    fn remove_dir_all(&self, path: &Path) -> GenesisResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }

    fn list_files(&self, dir: &Path) -> GenesisResult<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                GenesisError::from(ApplicationError::FilesystemError {
                    path,
                    reason: format!("Failed to list directory: {e}"),
                })
            })?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> GenesisError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_read_and_remove() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let nested = dir.path().join(".genesis/overrides");
        let file = nested.join("workspace.lua");

        fs.create_dir_all(&nested).unwrap();
        fs.write_file(&file, "-- stub\n").unwrap();

        assert!(fs.exists(&file));
        assert_eq!(fs.read_file(&file).unwrap(), "-- stub\n");

        fs.remove_file(&file).unwrap();
        assert!(!fs.exists(&file));
    }

    #[test]
    fn list_files_is_recursive_and_sorted() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let core = dir.path().join("Core");
        fs.create_dir_all(&core.join("src/Runtime")).unwrap();
        fs.write_file(&core.join("Runtime.vcxproj"), "").unwrap();
        fs.write_file(&core.join("src/Runtime/runtime.cpp"), "").unwrap();
        fs.write_file(&core.join("Editor.vcxproj"), "").unwrap();

        let files = fs.list_files(&core).unwrap();

        assert_eq!(
            files,
            [
                core.join("Editor.vcxproj"),
                core.join("Runtime.vcxproj"),
                core.join("src/Runtime/runtime.cpp"),
            ]
        );
    }

    #[test]
    fn list_files_of_missing_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        let files = LocalFilesystem::new()
            .list_files(&dir.path().join("nope"))
            .unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn io_failures_become_filesystem_errors() {
        let dir = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .read_file(&dir.path().join("missing.json"))
            .unwrap_err();
        assert!(matches!(
            err,
            GenesisError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
