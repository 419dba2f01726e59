//! Domain value objects: ProjectKind, Architecture.
//!
//! Pure value types: `Copy`, compared by value, without identity.
//! The architecture name conventions themselves live in `capabilities.rs`;
//! this file only defines the types, their string representations, and their
//! `FromStr` parsers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{
    capabilities::{ARCHITECTURE_REGISTRY, ArchitectureDef},
    error::DomainError,
};

// ── ProjectKind ───────────────────────────────────────────────────────────────

/// The kind of binary a project produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectKind {
    StaticLib,
    ConsoleApp,
}

impl ProjectKind {
    /// The spelling stored in `genesis.json`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StaticLib => "StaticLib",
            Self::ConsoleApp => "ConsoleApp",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "staticlib" | "staticlibrary" | "static-lib" => Ok(Self::StaticLib),
            "consoleapp" | "consoleapplication" | "console-app" => Ok(Self::ConsoleApp),
            _ => Err(DomainError::UnknownProjectKind { value: s.into() }),
        }
    }
}

// ── Architecture ──────────────────────────────────────────────────────────────

/// A target CPU architecture, resolved against the architecture registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Architecture(&'static ArchitectureDef);

impl Architecture {
    /// The abstract name used on the command line (`x86`, `x64`).
    pub fn name(&self) -> &'static str {
        self.0.name
    }

    /// Platform name understood by msbuild.
    pub fn msbuild(&self) -> &'static str {
        self.0.msbuild
    }

    /// Architecture name understood by premake.
    pub fn premake(&self) -> &'static str {
        self.0.premake
    }

    /// Every registered architecture name.
    pub fn names() -> Vec<&'static str> {
        ARCHITECTURE_REGISTRY.iter().map(|def| def.name).collect()
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Architecture {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::domain::capabilities::find_architecture(s)
            .map(Self)
            .ok_or_else(|| DomainError::UnknownArchitecture {
                name: s.into(),
                available: Self::names(),
            })
    }
}

/// A build configuration name such as `Debug` or `Release`.
///
/// Invariant: non-empty and trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildConfiguration(String);

impl BuildConfiguration {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BuildConfiguration {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Err(DomainError::InvalidConfiguration)
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }
}
