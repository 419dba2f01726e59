//! Test doubles shared by the application unit tests.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, WorkspaceStore},
    },
    domain::WorkspaceDocument,
    error::GenesisResult,
};

/// Minimal in-memory filesystem that records every write.
#[derive(Default)]
pub struct FakeFilesystem {
    files: Mutex<BTreeMap<PathBuf, String>>,
    dirs: Mutex<BTreeSet<PathBuf>>,
    writes: Mutex<Vec<PathBuf>>,
}

impl FakeFilesystem {
    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.to_string());
        self
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes.lock().unwrap().clone()
    }

    pub fn dirs(&self) -> Vec<PathBuf> {
        self.dirs.lock().unwrap().iter().cloned().collect()
    }
}

impl Filesystem for FakeFilesystem {
    fn create_dir_all(&self, path: &Path) -> GenesisResult<()> {
        self.dirs.lock().unwrap().insert(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> GenesisResult<()> {
        self.writes.lock().unwrap().push(path.to_path_buf());
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> GenesisResult<String> {
        self.content(path).ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "not found".into(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().keys().any(|p| p.starts_with(path))
            || self.dirs.lock().unwrap().iter().any(|p| p.starts_with(path))
    }

    fn remove_file(&self, path: &Path) -> GenesisResult<()> {
        self.files.lock().unwrap().remove(path);
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> GenesisResult<()> {
        self.files.lock().unwrap().retain(|p, _| !p.starts_with(path));
        self.dirs.lock().unwrap().retain(|p| !p.starts_with(path));
        Ok(())
    }

    fn list_files(&self, dir: &Path) -> GenesisResult<Vec<PathBuf>> {
        Ok(self
            .files
            .lock()
            .unwrap()
            .keys()
            .filter(|p| p.starts_with(dir))
            .cloned()
            .collect())
    }
}

/// Store holding at most one document.
#[derive(Default)]
pub struct FakeStore {
    document: Mutex<Option<WorkspaceDocument>>,
}

impl FakeStore {
    pub fn with(document: WorkspaceDocument) -> Self {
        Self {
            document: Mutex::new(Some(document)),
        }
    }

    pub fn parse(json: &str) -> Self {
        Self::with(serde_json::from_str(json).unwrap())
    }
}

impl WorkspaceStore for FakeStore {
    fn exists(&self) -> bool {
        self.document.lock().unwrap().is_some()
    }

    fn load(&self) -> GenesisResult<WorkspaceDocument> {
        self.document.lock().unwrap().clone().ok_or_else(|| {
            ApplicationError::WorkspaceNotFound {
                path: self.location(),
            }
            .into()
        })
    }

    fn save(&self, document: &WorkspaceDocument) -> GenesisResult<()> {
        *self.document.lock().unwrap() = Some(document.clone());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("genesis.json")
    }
}
