//! Application layer errors.
//!
//! These errors represent failures in orchestration, not workspace rules.
//! Workspace rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::generators::GeneratorInfo;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No `genesis.json` where one is required.
    #[error("No Genesis workspace found at {path}")]
    WorkspaceNotFound { path: PathBuf },

    /// `init` would replace an existing workspace.
    #[error("A Genesis workspace already exists at {path}")]
    WorkspaceExists { path: PathBuf },

    /// The workspace file exists but cannot be parsed.
    #[error("Invalid workspace document at {path}: {reason}")]
    InvalidDocument { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// In-memory adapter lock was poisoned.
    #[error("Adapter state lock poisoned")]
    StoreLockError,

    /// No generator registered under the requested name.
    #[error("Unknown generator '{name}'")]
    UnknownGenerator {
        name: String,
        available: Vec<GeneratorInfo>,
    },

    /// An external tool could not be started.
    #[error("Failed to run '{program}': {reason}")]
    ExternalTool { program: String, reason: String },

    /// Validation failed (application-level, not domain).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::WorkspaceNotFound { path } => vec![
                format!("Directory does not seem to be a Genesis project: {}", path.display()),
                "Run 'genesis init' to create a workspace".into(),
            ],
            Self::WorkspaceExists { path } => vec![
                format!("Workspace file already exists: {}", path.display()),
                "Use --force to replace it (destructive)".into(),
            ],
            Self::InvalidDocument { path, .. } => vec![
                format!("Check the JSON syntax of {}", path.display()),
                "Every project and module needs a \"type\" field".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::UnknownGenerator { available, .. } => {
                let mut suggestions = vec!["Available generators:".to_string()];
                for info in available {
                    suggestions.push(format!("  • {:<10} {}", info.name, info.description));
                }
                suggestions
            }
            Self::ExternalTool { program, .. } => vec![
                format!("Ensure '{program}' is installed and in your PATH"),
                "Tool names can be changed in the [tools] config section".into(),
            ],
            Self::StoreLockError | Self::ValidationFailed(_) => {
                vec!["Check the error details above".into()]
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::WorkspaceNotFound { .. } | Self::UnknownGenerator { .. } => {
                ErrorCategory::NotFound
            }
            Self::WorkspaceExists { .. } => ErrorCategory::Conflict,
            Self::InvalidDocument { .. } => ErrorCategory::Configuration,
            Self::ValidationFailed(_) => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::StoreLockError | Self::ExternalTool { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
