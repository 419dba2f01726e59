//! `genesis.json` on disk.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, instrument};

use genesis_core::{
    application::{ApplicationError, ports::WorkspaceStore},
    domain::WorkspaceDocument,
    error::{Context, GenesisResult},
};

/// File name of the workspace description.
pub const WORKSPACE_FILE: &str = "genesis.json";

const INDENT: &[u8] = b"    ";

/// Production store reading and writing `<root>/genesis.json`.
///
/// The file is always read and written whole. There is no locking; the last
/// writer wins.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store for the workspace rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            path: root.as_ref().join(WORKSPACE_FILE),
        }
    }

    /// Store backed by an explicit file.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Render a document the way it is stored: four-space indent, trailing
    /// newline.
    pub fn render(document: &WorkspaceDocument) -> GenesisResult<String> {
        let mut buf = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        document
            .serialize(&mut serializer)
            .context("failed to serialize workspace document")?;
        let mut text = String::from_utf8(buf).context("workspace document is not UTF-8")?;
        text.push('\n');
        Ok(text)
    }
}

impl WorkspaceStore for JsonFileStore {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> GenesisResult<WorkspaceDocument> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            ApplicationError::FilesystemError {
                path: self.path.clone(),
                reason: format!("Failed to read workspace: {e}"),
            }
        })?;

        let document: WorkspaceDocument =
            serde_json::from_str(&text).map_err(|e| ApplicationError::InvalidDocument {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        debug!(workspace = %document.name, "Workspace loaded");
        Ok(document)
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn save(&self, document: &WorkspaceDocument) -> GenesisResult<()> {
        let text = Self::render(document)?;
        std::fs::write(&self.path, text).map_err(|e| ApplicationError::FilesystemError {
            path: self.path.clone(),
            reason: format!("Failed to write workspace: {e}"),
        })?;
        debug!("Workspace saved");
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genesis_core::{
        domain::{Project, ProjectKind},
        error::{ErrorCategory, GenesisError},
    };
    use tempfile::TempDir;

    #[test]
    fn save_then_load_returns_same_document() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        let mut doc = WorkspaceDocument::new("Engine");
        doc.add_project("Core", "Runtime", Project::new(ProjectKind::StaticLib))
            .unwrap();

        assert!(!store.exists());
        store.save(&doc).unwrap();

        assert!(store.exists());
        assert_eq!(store.load().unwrap(), doc);
        assert_eq!(store.location(), dir.path().join("genesis.json"));
    }

    #[test]
    fn file_uses_four_space_indent_and_field_order() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        store.save(&WorkspaceDocument::new("Engine")).unwrap();

        let text = std::fs::read_to_string(dir.path().join("genesis.json")).unwrap();

        assert_eq!(
            text,
            "{\n    \"name\": \"Engine\",\n    \"projects\": {},\n    \"modules\": {}\n}\n"
        );
    }

    #[test]
    fn unknown_fields_and_malformed_nodes_are_preserved() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("genesis.json");
        std::fs::write(
            &path,
            r#"{"name":"Engine","projects":{"Loose":42},"modules":{"m":{"type":"premake",
                "includeDirs":[],"packet":{"type":"zip","url":"u"}}}}"#,
        )
        .unwrap();
        let store = JsonFileStore::at(&path);

        let doc = store.load().unwrap();
        store.save(&doc).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();

        assert!(text.contains("\"Loose\": 42"));
        assert!(text.contains("\"url\": \"u\""));
    }

    #[test]
    fn invalid_json_is_reported_as_invalid_document() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("genesis.json"), "{ not json").unwrap();

        let err = JsonFileStore::new(dir.path()).load().unwrap_err();

        assert!(matches!(
            err,
            GenesisError::Application(ApplicationError::InvalidDocument { .. })
        ));
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
