//! Premake override stubs and project-file generation.
//!
//! Ensures the workspace has a user-editable override script at
//! `.genesis/overrides/workspace.lua` and every project one at
//! `.genesis/overrides/projects/<id>.lua`, then runs premake to produce the
//! native build files. Stubs are created once and never touched again.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        generators::{
            GenerateOutcome, Generator, GeneratorContext, GeneratorOptions, OPT_ACTION,
            OPT_ARCHITECTURE,
        },
        ports::CommandSpec,
    },
    domain::Architecture,
    error::GenesisResult,
};

/// Directory holding the override scripts, relative to the workspace root.
pub const OVERRIDES_DIR: &str = ".genesis/overrides";

/// Per-project stubs, inside [`OVERRIDES_DIR`]. Kept apart from the
/// workspace stub so no project id can claim its file.
pub const PROJECTS_DIR: &str = "projects";

/// Stub applied to the whole workspace.
pub const WORKSPACE_STUB: &str = "workspace";

/// Action used when none is given.
pub const DEFAULT_ACTION: &str = "vs2022";

/// Generator for override stubs plus a premake run.
#[derive(Debug, Default)]
pub struct PremakeGenerator;

impl PremakeGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Path of the workspace-wide override script.
    pub fn workspace_stub_path(root: &Path) -> PathBuf {
        root.join(OVERRIDES_DIR).join(format!("{WORKSPACE_STUB}.lua"))
    }

    /// Path of the override script for project `id`.
    pub fn project_stub_path(root: &Path, id: &str) -> PathBuf {
        root.join(OVERRIDES_DIR)
            .join(PROJECTS_DIR)
            .join(format!("{id}.lua"))
    }

    fn stub_content(target: &str) -> String {
        format!(
            "-- Genesis override script for '{target}'.\n\
             --\n\
             -- This file is created once and never regenerated. Add premake\n\
             -- statements below to adjust the generated configuration.\n\
             \n\
             print(\"genesis: applying overrides for {target}\")\n"
        )
    }

    /// Create the stub for `target` at `path` unless one exists. Returns the
    /// path when created.
    fn ensure_stub(
        ctx: &GeneratorContext<'_>,
        path: PathBuf,
        target: &str,
    ) -> GenesisResult<Option<PathBuf>> {
        if ctx.filesystem.exists(&path) {
            debug!(path = %path.display(), "Override stub kept");
            return Ok(None);
        }
        ctx.filesystem.write_file(&path, &Self::stub_content(target))?;
        debug!(path = %path.display(), "Override stub created");
        Ok(Some(path))
    }
}

impl Generator for PremakeGenerator {
    fn name(&self) -> &'static str {
        "premake"
    }

    fn description(&self) -> &'static str {
        "Premake override stubs and native project files"
    }

    #[instrument(skip_all, fields(generator = "premake", workspace = %ctx.workspace.name))]
    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        options: &GeneratorOptions,
    ) -> GenesisResult<GenerateOutcome> {
        let architecture = match options.get(OPT_ARCHITECTURE) {
            Some(name) => match name.parse::<Architecture>() {
                Ok(arch) => Some(arch),
                Err(e) => return Ok(GenerateOutcome::rejected(e.to_string())),
            },
            None => None,
        };
        let action = options
            .get(OPT_ACTION)
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(DEFAULT_ACTION);

        let overrides = ctx.root.join(OVERRIDES_DIR);
        ctx.filesystem.create_dir_all(&overrides)?;
        ctx.filesystem.create_dir_all(&overrides.join(PROJECTS_DIR))?;

        let mut created = Vec::new();
        let workspace_stub = Self::workspace_stub_path(ctx.root);
        if let Some(path) = Self::ensure_stub(ctx, workspace_stub, WORKSPACE_STUB)? {
            created.push(path);
        }
        for id in ctx.workspace.projects.keys() {
            let stub = Self::project_stub_path(ctx.root, id);
            if let Some(path) = Self::ensure_stub(ctx, stub, id)? {
                created.push(path);
            }
        }
        info!(created = created.len(), "Override stubs ready");

        let mut command = CommandSpec::new(&ctx.toolchain.premake)
            .arg(action)
            .current_dir(ctx.root);
        if let Some(arch) = architecture {
            command = command.arg(format!("--arch={}", arch.premake()));
        }

        info!(command = %command, "Running premake");
        let status = ctx.runner.run(&command)?;

        if status.success() {
            Ok(GenerateOutcome::Success { artifacts: created })
        } else {
            warn!(code = ?status.code, "premake exited unsuccessfully");
            Ok(GenerateOutcome::ProcessFailed {
                command: command.to_string(),
                code: status.code,
            })
        }
    }
}
