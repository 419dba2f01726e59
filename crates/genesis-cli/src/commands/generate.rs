//! `genesis generate` — run one generator, or list them.

use serde::Serialize;

use genesis_core::application::{
    GenerateOutcome, GeneratorInfo, GeneratorOptions,
    generators::{OPT_ACTION, OPT_ARCHITECTURE, OPT_CONFIGURATION},
};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    commands::exit_description,
    config::{AppConfig, Defaults},
    error::{CliError, CliResult},
    output::OutputManager,
    session::Session,
};

#[derive(Serialize)]
struct GeneratorEntry {
    name: &'static str,
    description: &'static str,
}

pub fn execute(
    args: GenerateArgs,
    session: Session,
    config: &AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = session.generate();
    let Some(name) = args.generator.as_deref() else {
        return list(&service.generators(), &output);
    };

    let options = build_options(&args, &config.defaults);
    let operation = format!("generate {name}");

    output.timed(|| match service.generate(name, &options)? {
        GenerateOutcome::Success { artifacts } => {
            for path in &artifacts {
                let shown = path.strip_prefix(session.root()).unwrap_or(path.as_path());
                output.print(&format!("Wrote {}", shown.display()))?;
            }
            Ok(())
        }
        GenerateOutcome::Rejected { reason } => Err(CliError::Rejected { operation, reason }),
        GenerateOutcome::ProcessFailed { command, code } => Err(CliError::OperationFailed {
            operation,
            reason: format!("'{command}' failed with {}", exit_description(code)),
        }),
    })
}

fn list(generators: &[GeneratorInfo], output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        let entries: Vec<_> = generators
            .iter()
            .map(|info| GeneratorEntry {
                name: info.name,
                description: info.description,
            })
            .collect();
        return output.json(&entries);
    }

    output.header("Available generators:")?;
    for info in generators {
        output.print(&format!("  {:<10} {}", info.name, info.description))?;
    }
    Ok(())
}

/// Flags first, then config defaults; `--set` pairs are applied last and win.
fn build_options(args: &GenerateArgs, defaults: &Defaults) -> GeneratorOptions {
    let mut options = GeneratorOptions::new()
        .with(
            OPT_ARCHITECTURE,
            args.architecture.as_deref().unwrap_or(&defaults.architecture),
        )
        .with(
            OPT_CONFIGURATION,
            args.configuration.as_deref().unwrap_or(&defaults.configuration),
        )
        .with(
            OPT_ACTION,
            args.action.as_deref().unwrap_or(&defaults.premake_action),
        );

    for (key, value) in &args.set {
        options.insert(key, value);
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> GenerateArgs {
        GenerateArgs {
            generator: Some("vscode".into()),
            architecture: None,
            configuration: None,
            action: None,
            set: Vec::new(),
        }
    }

    #[test]
    fn omitted_flags_use_config_defaults() {
        let options = build_options(&args(), &Defaults::default());

        assert_eq!(options.get(OPT_ARCHITECTURE), Some("x64"));
        assert_eq!(options.get(OPT_CONFIGURATION), Some("Debug"));
        assert_eq!(options.get(OPT_ACTION), Some("vs2022"));
    }

    #[test]
    fn flags_beat_defaults_and_set_beats_flags() {
        let args = GenerateArgs {
            architecture: Some("x86".into()),
            configuration: Some("Release".into()),
            set: vec![
                ("action".into(), "gmake2".into()),
                ("Architecture".into(), "x64".into()),
            ],
            ..args()
        };

        let options = build_options(&args, &Defaults::default());

        assert_eq!(options.get(OPT_ARCHITECTURE), Some("x64"));
        assert_eq!(options.get(OPT_CONFIGURATION), Some("Release"));
        assert_eq!(options.get(OPT_ACTION), Some("gmake2"));
    }
}
