//! Flags accepted before or after any `genesis` subcommand.

use clap::Args;
use std::path::PathBuf;

/// Logging, colour, config, and rendering switches shared by every command.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log level for the stderr diagnostics of genesis and its libraries.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "More diagnostics on stderr (-v, -vv, -vvv)",
        long_help = "Raise the stderr log level for genesis, genesis_core, and genesis_adapters:
    (none)  - warnings and errors
    -v      - info: each service step and external command line
    -vv     - debug: stub creation, skipped modules, flattening counts
    -vvv    - trace
Setting RUST_LOG replaces this filter entirely."
    )]
    pub verbose: u8,

    /// Only errors, plus the `Failed!` line of a timed command.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print errors only; 'Done!' lines are dropped"
    )]
    pub quiet: bool,

    /// Plain text even on a terminal. Also set through `NO_COLOR` or
    /// `output.no_color` in the config file.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output (also NO_COLOR)"
    )]
    pub no_color: bool,

    /// TOML file layered over the built-in defaults; it must exist when given.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "TOML config file [default: <config dir>/genesis/config.toml]"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How results are rendered",
        long_help = "How results are rendered. 'json' prints the generator list and \
                     'config list' as JSON on stdout and switches the stderr log lines \
                     to JSON records."
    )]
    pub output_format: OutputFormat,
}

/// Rendering of command results on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain when stdout is piped.
    #[default]
    Auto,
    /// Colored symbols and headers.
    Human,
    /// The same lines without ANSI codes.
    Plain,
    /// Structured results and JSON log records.
    Json,
}
