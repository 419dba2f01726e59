//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use genesis_core::domain::ProjectKind;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "genesis",
    bin_name = "genesis",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "CLI utility tools for genesis workspaces",
    long_about = "Genesis keeps a multi-project C/C++ workspace in genesis.json \
                  and generates premake, Visual Studio Code and msbuild \
                  artifacts from it.",
    after_help = "EXAMPLES:\n\
        \x20 genesis init Engine\n\
        \x20 genesis project --group Core --name Runtime --type static-lib\n\
        \x20 genesis module glfw --repo https://github.com/glfw/glfw.git\n\
        \x20 genesis install && genesis generate premake\n\
        \x20 genesis build --arch x64 --configuration Release",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialise a new workspace in the current directory.
    #[command(
        about = "Initialise a new genesis workspace",
        after_help = "EXAMPLES:\n\
            \x20 genesis init            # named after the current directory\n\
            \x20 genesis init Engine\n\
            \x20 genesis init Engine --force"
    )]
    Init(InitArgs),

    /// Register a project in `genesis.json`.
    #[command(
        about = "Add a project to the workspace",
        after_help = "EXAMPLES:\n\
            \x20 genesis project --group Core --name Runtime --type static-lib\n\
            \x20 genesis project --group Apps --name Editor --type console-app --no-include"
    )]
    Project(ProjectArgs),

    /// Register a module in `genesis.json`.
    #[command(
        about = "Add a module to the workspace",
        after_help = "EXAMPLES:\n\
            \x20 genesis module glfw --repo https://github.com/glfw/glfw.git\n\
            \x20 genesis module imgui --repo https://github.com/ocornut/imgui.git --include ./,backends/"
    )]
    Module(ModuleArgs),

    /// Fetch every module packet.
    #[command(visible_alias = "i", about = "Install module packets")]
    Install,

    /// Remove build output and generated project files.
    #[command(about = "Clean build output and generated files")]
    Clean,

    /// Run a generator against the workspace.
    #[command(
        visible_alias = "gen",
        about = "Generate tool-specific artifacts",
        after_help = "EXAMPLES:\n\
            \x20 genesis generate                 # list generators\n\
            \x20 genesis generate premake --action gmake2\n\
            \x20 genesis generate vscode --arch x86 --configuration Release"
    )]
    Generate(GenerateArgs),

    /// Build the generated solution.
    #[command(
        about = "Build the workspace solution",
        after_help = "EXAMPLES:\n\
            \x20 genesis build\n\
            \x20 genesis build --arch x86 --configuration Release"
    )]
    Build(BuildArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 genesis completions bash > ~/.local/share/bash-completion/completions/genesis\n\
            \x20 genesis completions zsh  > ~/.zfunc/_genesis\n\
            \x20 genesis completions fish > ~/.config/fish/completions/genesis.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Genesis configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 genesis config get defaults.architecture\n\
            \x20 genesis config list\n\
            \x20 genesis config path"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `genesis init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Workspace name; defaults to the current directory name.
    #[arg(value_name = "NAME", help = "Workspace name")]
    pub name: Option<String>,

    /// Replace an existing `genesis.json`.
    #[arg(long = "force", help = "Replace an existing workspace file")]
    pub force: bool,
}

// ── project ───────────────────────────────────────────────────────────────────

/// Arguments for `genesis project`.
#[derive(Debug, Args)]
pub struct ProjectArgs {
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    #[arg(short = 'g', long = "group", value_name = "GROUP", help = "Project group")]
    pub group: Option<String>,

    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        value_enum,
        help = "Project type"
    )]
    pub kind: Option<ProjectType>,

    /// Skip the `%{wks.location}/<group>/src/<name>/` include directory.
    #[arg(long = "no-include", help = "Do not add the project's own include dir")]
    pub no_include: bool,
}

/// Project types accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProjectType {
    /// Executable with a console entry point.
    ConsoleApp,
    /// Static library.
    StaticLib,
}

impl From<ProjectType> for ProjectKind {
    fn from(value: ProjectType) -> Self {
        match value {
            ProjectType::ConsoleApp => ProjectKind::ConsoleApp,
            ProjectType::StaticLib => ProjectKind::StaticLib,
        }
    }
}

// ── module ────────────────────────────────────────────────────────────────────

/// Arguments for `genesis module`.
#[derive(Debug, Args)]
pub struct ModuleArgs {
    #[arg(value_name = "NAME", help = "Module name")]
    pub name: Option<String>,

    /// Repository cloned by `genesis install`.
    #[arg(short = 'r', long = "repo", value_name = "URL", help = "Git repository URL")]
    pub repo: Option<String>,

    /// Comma-separated include directories, relative to the module root.
    #[arg(
        short = 'i',
        long = "include",
        value_name = "DIRS",
        help = "Include directories (comma-separated) [default: include/]"
    )]
    pub include: Option<String>,

    /// Premake script wiring the module into the build.
    #[arg(
        short = 's',
        long = "script",
        value_name = "PATH",
        help = "Premake script [default: %{wks.location}/.genesis/<NAME>.lua]"
    )]
    pub script: Option<String>,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `genesis generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Generator to run; lists the generators when omitted.
    #[arg(value_name = "GENERATOR", help = "Generator name (vscode, premake)")]
    pub generator: Option<String>,

    #[arg(
        short = 'a',
        long = "arch",
        value_name = "ARCH",
        help = "Target architecture [default: from config]"
    )]
    pub architecture: Option<String>,

    #[arg(
        long = "configuration",
        value_name = "CONFIG",
        help = "Build configuration [default: from config]"
    )]
    pub configuration: Option<String>,

    #[arg(
        long = "action",
        value_name = "ACTION",
        help = "Premake action [default: from config]"
    )]
    pub action: Option<String>,

    /// Extra generator options.
    #[arg(
        long = "set",
        value_name = "KEY=VALUE",
        value_parser = parse_key_value,
        help = "Extra generator option (repeatable)"
    )]
    pub set: Vec<(String, String)>,
}

// ── build ─────────────────────────────────────────────────────────────────────

/// Arguments for `genesis build`.
#[derive(Debug, Args)]
pub struct BuildArgs {
    #[arg(
        short = 'a',
        long = "arch",
        value_name = "ARCH",
        help = "Target architecture [default: from config]"
    )]
    pub architecture: Option<String>,

    #[arg(
        long = "configuration",
        value_name = "CONFIG",
        help = "Build configuration [default: from config]"
    )]
    pub configuration: Option<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `genesis completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Supported shells.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}

// ── config ────────────────────────────────────────────────────────────────────

/// Configuration subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one value.
    Get {
        /// Dotted key, e.g. `tools.premake`.
        key: String,
    },

    /// Print the effective configuration.
    List,

    /// Print the default configuration file path.
    Path,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("genesis").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn project_type_uses_kebab_case() {
        let cli = parse(&["project", "--type", "static-lib", "--no-include"]);
        let Commands::Project(args) = cli.command else {
            panic!("expected project");
        };
        assert_eq!(args.kind, Some(ProjectType::StaticLib));
        assert!(args.no_include);
        assert_eq!(ProjectKind::from(ProjectType::ConsoleApp), ProjectKind::ConsoleApp);
    }

    #[test]
    fn generate_alias_and_repeated_set() {
        let cli = parse(&["gen", "vscode", "--set", "a=1", "--set", "b=x=y"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.generator.as_deref(), Some("vscode"));
        assert_eq!(
            args.set,
            [("a".to_string(), "1".to_string()), ("b".into(), "x=y".into())]
        );
    }

    #[test]
    fn set_without_equals_is_rejected() {
        assert!(Cli::try_parse_from(["genesis", "generate", "vscode", "--set", "nope"]).is_err());
        assert!(parse_key_value("=v").is_err());
    }

    #[test]
    fn install_has_short_alias() {
        assert!(matches!(parse(&["i"]).command, Commands::Install));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["genesis", "-q", "-v", "clean"]).is_err());
    }

    #[test]
    fn global_flags_work_after_the_subcommand() {
        let cli = parse(&["generate", "--output-format", "json", "-vv", "--no-color"]);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
    }

    #[test]
    fn output_format_help_names_what_json_changes() {
        let mut cmd = Cli::command().term_width(0);
        let help = cmd.render_long_help().to_string();
        assert!(help.contains("generator list"));
        assert!(help.contains("config list"));
    }

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }
}
