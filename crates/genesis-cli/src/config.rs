//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate only receives the [`Toolchain`]
//! derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `GENESIS_<SECTION>__<KEY>`, e.g.
//!    `GENESIS_TOOLS__PREMAKE=/opt/premake5`
//! 3. Config file: `--config FILE`, or `config.toml` in the platform config
//!    directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use genesis_core::application::Toolchain;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "GENESIS";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Values used when a command flag is omitted.
    pub defaults: Defaults,
    /// External program names.
    pub tools: ToolsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub architecture: String,
    pub configuration: String,
    pub premake_action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub git: String,
    pub premake: String,
    pub msbuild: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            architecture: "x64".into(),
            configuration: "Debug".into(),
            premake_action: "vs2022".into(),
        }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        let toolchain = Toolchain::default();
        Self {
            git: toolchain.git,
            premake: toolchain.premake,
            msbuild: toolchain.msbuild,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, a TOML file and the environment.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required, true)
    }

    fn load_from(path: &Path, required: bool, with_env: bool) -> anyhow::Result<Self> {
        debug!(path = %path.display(), required, "Loading configuration");

        let defaults = Config::try_from(&Self::default()).context("Invalid built-in defaults")?;
        let mut builder = Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            );

        if with_env {
            builder = builder.add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        }

        builder
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs`, falling back to `.genesis.toml` in the
    /// current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "genesis", "genesis")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".genesis.toml"))
    }

    /// External program names for the core services.
    pub fn toolchain(&self) -> Toolchain {
        Toolchain {
            git: self.tools.git.clone(),
            premake: self.tools.premake.clone(),
            msbuild: self.tools.msbuild.clone(),
        }
    }
}
