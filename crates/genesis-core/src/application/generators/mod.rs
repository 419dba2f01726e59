//! Generators - turn the flattened workspace into tool-specific artifacts.
//!
//! The set of generators is closed and registered explicitly in
//! [`GeneratorRegistry::builtin`]. Each one validates its own options and
//! reports invalid options as [`GenerateOutcome::Rejected`] so the caller can
//! present every failure the same way; only I/O failures are errors.

pub mod premake;
pub mod registry;
pub mod vscode;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::{
    application::{
        Toolchain,
        ports::{Filesystem, ProcessRunner},
    },
    domain::FlatWorkspace,
    error::GenesisResult,
};

pub use premake::PremakeGenerator;
pub use registry::GeneratorRegistry;
pub use vscode::VsCodeGenerator;

/// Option key for the target architecture (`x86`, `x64`).
pub const OPT_ARCHITECTURE: &str = "architecture";
/// Option key for the build configuration (`Debug`, `Release`).
pub const OPT_CONFIGURATION: &str = "configuration";
/// Option key for the premake action (`vs2022`, `gmake2`).
pub const OPT_ACTION: &str = "action";

/// Everything a generator may read or touch.
pub struct GeneratorContext<'a> {
    /// Freshly loaded and flattened for this invocation.
    pub workspace: &'a FlatWorkspace,
    /// Workspace root; artifact paths are resolved against it.
    pub root: &'a Path,
    pub filesystem: &'a dyn Filesystem,
    pub runner: &'a dyn ProcessRunner,
    pub toolchain: &'a Toolchain,
}

/// Generator-specific configuration bag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorOptions(BTreeMap<String, String>);

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert, replacing any previous value. Keys are lowercased.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into().to_ascii_lowercase(), value.into());
    }

    /// Value for `key`, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(&key.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Result of one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// Everything ran; lists files written or created.
    Success { artifacts: Vec<PathBuf> },
    /// Options failed validation; nothing was written.
    Rejected { reason: String },
    /// An external tool ran but exited unsuccessfully.
    ProcessFailed { command: String, code: Option<i32> },
}

impl GenerateOutcome {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Name and purpose of a registered generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A pluggable artifact generator.
pub trait Generator: Send + Sync {
    /// Stable lowercase dispatch key.
    fn name(&self) -> &'static str;

    /// Human-readable purpose.
    fn description(&self) -> &'static str;

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        options: &GeneratorOptions,
    ) -> GenesisResult<GenerateOutcome>;

    fn info(&self) -> GeneratorInfo {
        GeneratorInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_keys_are_case_insensitive() {
        let options = GeneratorOptions::new().with("Architecture", "x64");
        assert_eq!(options.get("architecture"), Some("x64"));
        assert_eq!(options.get("ARCHITECTURE"), Some("x64"));
        assert_eq!(options.get(OPT_CONFIGURATION), None);
    }

    #[test]
    fn later_insert_wins() {
        let mut options = GeneratorOptions::new().with(OPT_ACTION, "vs2022");
        options.insert(OPT_ACTION, "gmake2");
        assert_eq!(options.get(OPT_ACTION), Some("gmake2"));
        assert_eq!(options.iter().count(), 1);
    }

    #[test]
    fn only_success_outcome_is_success() {
        assert!(GenerateOutcome::Success { artifacts: vec![] }.is_success());
        assert!(!GenerateOutcome::rejected("bad").is_success());
        assert!(
            !GenerateOutcome::ProcessFailed {
                command: "premake5 vs2022".into(),
                code: Some(1),
            }
            .is_success()
        );
    }
}
