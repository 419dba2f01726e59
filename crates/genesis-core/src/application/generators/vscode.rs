//! Visual Studio Code launch and task configuration.
//!
//! Writes `.vscode/tasks.json` and `.vscode/launch.json` so every runnable
//! project can be built and debugged from the editor. Both files are owned by
//! Genesis and replaced on every run.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::generators::{
        GenerateOutcome, Generator, GeneratorContext, GeneratorOptions, OPT_ARCHITECTURE,
        OPT_CONFIGURATION,
    },
    domain::{Architecture, BuildConfiguration},
    error::{Context, GenesisResult},
};

const VSCODE_DIR: &str = ".vscode";
const TASKS_FILE: &str = "tasks.json";
const LAUNCH_FILE: &str = "launch.json";
const TASKS_VERSION: &str = "2.0.0";
const LAUNCH_VERSION: &str = "0.2.0";

/// Label of the task every build task depends on.
pub const REGENERATE_TASK: &str = "genesis-regenerate";

/// Program the regenerate task runs. This is the Genesis binary itself, which
/// the editor finds on `PATH`; it is not part of the configurable toolchain.
pub const GENESIS_PROGRAM: &str = "genesis";

#[derive(Debug, Serialize)]
struct TasksFile {
    version: &'static str,
    tasks: Vec<Task>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Task {
    label: String,
    #[serde(rename = "type")]
    kind: &'static str,
    command: String,
    args: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    depends_on: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    problem_matcher: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct LaunchFile {
    version: &'static str,
    configurations: Vec<LaunchEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LaunchEntry {
    name: String,
    #[serde(rename = "type")]
    kind: &'static str,
    request: &'static str,
    program: String,
    cwd: String,
    pre_launch_task: String,
}

/// Generator for `.vscode/` launch targets and build tasks.
#[derive(Debug, Default)]
pub struct VsCodeGenerator;

impl VsCodeGenerator {
    pub fn new() -> Self {
        Self
    }

    fn build_label(configuration: &BuildConfiguration) -> String {
        format!("build-{configuration}")
    }

    fn launch_entry(id: &str, configuration: &BuildConfiguration) -> LaunchEntry {
        let out_dir = format!("${{workspaceFolder}}/bin/{configuration}/{id}");
        LaunchEntry {
            name: format!("{id}-{configuration}"),
            kind: "cppvsdbg",
            request: "launch",
            program: format!("{out_dir}/{id}.exe"),
            cwd: out_dir,
            pre_launch_task: Self::build_label(configuration),
        }
    }

    fn build_task(
        msbuild: &str,
        workspace: &str,
        architecture: Architecture,
        configuration: &BuildConfiguration,
    ) -> Task {
        Task {
            label: Self::build_label(configuration),
            kind: "shell",
            command: msbuild.to_string(),
            args: vec![
                format!("{workspace}.sln"),
                format!("/p:Configuration={configuration}"),
                format!("/p:Platform={}", architecture.msbuild()),
            ],
            depends_on: Some(REGENERATE_TASK),
            group: Some("build"),
            problem_matcher: Some("$msCompile"),
        }
    }

    fn regenerate_task() -> Task {
        Task {
            label: REGENERATE_TASK.to_string(),
            kind: "shell",
            command: GENESIS_PROGRAM.to_string(),
            args: vec!["generate".into(), "premake".into()],
            depends_on: None,
            group: None,
            problem_matcher: None,
        }
    }

    fn write_json<T: Serialize>(
        ctx: &GeneratorContext<'_>,
        path: &Path,
        value: &T,
    ) -> GenesisResult<()> {
        let mut content = serde_json::to_string_pretty(value)
            .context(format!("failed to serialize {}", path.display()))?;
        content.push('\n');
        ctx.filesystem.write_file(path, &content)
    }
}

impl Generator for VsCodeGenerator {
    fn name(&self) -> &'static str {
        "vscode"
    }

    fn description(&self) -> &'static str {
        "Visual Studio Code launch configurations and build tasks"
    }

    #[instrument(skip_all, fields(generator = "vscode", workspace = %ctx.workspace.name))]
    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        options: &GeneratorOptions,
    ) -> GenesisResult<GenerateOutcome> {
        let architecture: Architecture =
            match options.get(OPT_ARCHITECTURE).unwrap_or_default().parse() {
                Ok(arch) => arch,
                Err(e) => return Ok(GenerateOutcome::rejected(e.to_string())),
            };
        let configuration: BuildConfiguration =
            match options.get(OPT_CONFIGURATION).unwrap_or_default().parse() {
                Ok(cfg) => cfg,
                Err(e) => return Ok(GenerateOutcome::rejected(e.to_string())),
            };

        let mut launches = Vec::new();
        let mut tasks: Vec<Task> = Vec::new();

        for (id, _) in ctx.workspace.runnable_projects() {
            launches.push(Self::launch_entry(id, &configuration));

            let label = Self::build_label(&configuration);
            if tasks.iter().all(|t| t.label != label) {
                tasks.push(Self::build_task(
                    &ctx.toolchain.msbuild,
                    &ctx.workspace.name,
                    architecture,
                    &configuration,
                ));
            }
        }

        if !tasks.is_empty() {
            tasks.push(Self::regenerate_task());
        }

        debug!(
            launches = launches.len(),
            tasks = tasks.len(),
            "VSCode configuration assembled"
        );

        ctx.filesystem.create_dir_all(&ctx.root.join(VSCODE_DIR))?;
        let [tasks_path, launch_path] = artifact_paths(ctx.root);

        Self::write_json(
            ctx,
            &tasks_path,
            &TasksFile {
                version: TASKS_VERSION,
                tasks,
            },
        )?;
        Self::write_json(
            ctx,
            &launch_path,
            &LaunchFile {
                version: LAUNCH_VERSION,
                configurations: launches,
            },
        )?;

        info!(arch = %architecture, configuration = %configuration, "VSCode files written");

        Ok(GenerateOutcome::Success {
            artifacts: vec![tasks_path, launch_path],
        })
    }
}

/// Paths the generator writes below `root`.
pub fn artifact_paths(root: &Path) -> [PathBuf; 2] {
    let dir = root.join(VSCODE_DIR);
    [dir.join(TASKS_FILE), dir.join(LAUNCH_FILE)]
}
