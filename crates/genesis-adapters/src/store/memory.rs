//! In-memory workspace store.

use std::{
    path::PathBuf,
    sync::{Arc, RwLock},
};

use genesis_core::{
    application::{ApplicationError, ports::WorkspaceStore},
    domain::WorkspaceDocument,
    error::GenesisResult,
};

/// Thread-safe in-memory store holding at most one document.
///
/// Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Option<WorkspaceDocument>>>,
}

impl MemoryStore {
    /// Create a store with no workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `document`.
    pub fn with_document(document: WorkspaceDocument) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(document))),
        }
    }

    /// Create a store from raw `genesis.json` text.
    pub fn from_json(json: &str) -> GenesisResult<Self> {
        let document =
            serde_json::from_str(json).map_err(|e| ApplicationError::InvalidDocument {
                path: PathBuf::from(crate::store::WORKSPACE_FILE),
                reason: e.to_string(),
            })?;
        Ok(Self::with_document(document))
    }

    /// Drop the stored document.
    pub fn clear(&self) -> GenesisResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        *inner = None;
        Ok(())
    }
}

impl WorkspaceStore for MemoryStore {
    fn exists(&self) -> bool {
        self.inner
            .read()
            .map(|inner| inner.is_some())
            .unwrap_or(false)
    }

    fn load(&self) -> GenesisResult<WorkspaceDocument> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.clone().ok_or_else(|| {
            ApplicationError::WorkspaceNotFound {
                path: self.location(),
            }
            .into()
        })
    }

    fn save(&self, document: &WorkspaceDocument) -> GenesisResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        *inner = Some(document.clone());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from(crate::store::WORKSPACE_FILE)
    }
}
