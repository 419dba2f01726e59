// ============================================================================
// domain/errors.rs - WORKSPACE MODEL ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::entities::Section;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reported after the failing operation has unwound)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Configuration-shape Errors
    // ========================================================================
    /// A node is neither a leaf entity nor a one-level group of leaves.
    #[error("malformed {section} entry at '{path}': expected an entry with a 'type' field")]
    MalformedEntry { section: Section, path: String },

    /// Two entries flatten to the same composite identifier.
    #[error("duplicate {section} identifier '{id}' after flattening")]
    DuplicateIdentifier { section: Section, id: String },

    /// Registration targeted a group key that holds a leaf entry.
    #[error("{section} key '{key}' is an entry, not a group")]
    NotAGroup { section: Section, key: String },

    // ========================================================================
    // Registration Errors
    // ========================================================================
    #[error("project '{name}' already exists in group '{group}'")]
    ProjectExists { group: String, name: String },

    #[error("module '{name}' already exists")]
    ModuleExists { name: String },

    #[error("invalid identifier '{value}': {reason}")]
    InvalidIdentifier { value: String, reason: String },

    #[error("unknown project type '{value}'")]
    UnknownProjectKind { value: String },

    // ========================================================================
    // Option Errors
    // ========================================================================
    #[error("unknown architecture '{name}'")]
    UnknownArchitecture {
        name: String,
        available: Vec<&'static str>,
    },

    #[error("build configuration must not be empty")]
    InvalidConfiguration,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MalformedEntry { section, path } => vec![
                format!("Fix the {section} entry at '{path}' in genesis.json"),
                "Entries may be grouped at most one level deep".into(),
                "Every entry needs a \"type\" field".into(),
            ],
            Self::DuplicateIdentifier { section, id } => vec![
                format!("Two {section} entries resolve to '{id}'"),
                "Rename the group or the entry so '<group>-<name>' is unique".into(),
            ],
            Self::NotAGroup { key, .. } => vec![
                format!("'{key}' already holds an ungrouped entry"),
                "Choose a different group name".into(),
            ],
            Self::ProjectExists { group, name } => vec![
                format!("'{group}/{name}' is already registered"),
                "Choose a different project name or group".into(),
            ],
            Self::ModuleExists { name } => vec![
                format!("Module '{name}' is already registered"),
                "Choose a different module name".into(),
            ],
            Self::InvalidIdentifier { .. } => vec![
                "Use letters, digits, '_' and '-' only".into(),
                "Examples: Core, Sandbox, glfw".into(),
            ],
            Self::UnknownProjectKind { .. } => vec![
                "Supported project types:".into(),
                "  • StaticLib  - static library".into(),
                "  • ConsoleApp - console application".into(),
            ],
            Self::UnknownArchitecture { available, .. } => {
                let mut suggestions = vec!["Supported architectures:".to_string()];
                for name in available {
                    suggestions.push(format!("  • {name}"));
                }
                suggestions
            }
            Self::InvalidConfiguration => vec![
                "Pass a build configuration, e.g. --configuration Debug".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedEntry { .. } | Self::DuplicateIdentifier { .. } => {
                ErrorCategory::Configuration
            }
            Self::NotAGroup { .. } | Self::ProjectExists { .. } | Self::ModuleExists { .. } => {
                ErrorCategory::Conflict
            }
            Self::InvalidIdentifier { .. }
            | Self::UnknownProjectKind { .. }
            | Self::UnknownArchitecture { .. }
            | Self::InvalidConfiguration => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Configuration,
}
