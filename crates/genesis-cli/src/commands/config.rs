//! `genesis config` — inspect configuration values.

use crate::{
    cli::{ConfigCommands, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: &AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(config, &key)?;
            output.print(&value)?;
        }

        ConfigCommands::List => {
            if output.format() == OutputFormat::Json {
                return output.json(config);
            }
            let serialised =
                toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.header("Current Configuration:")?;
            output.print(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let value = match key {
        "defaults.architecture" => config.defaults.architecture.clone(),
        "defaults.configuration" => config.defaults.configuration.clone(),
        "defaults.premake_action" => config.defaults.premake_action.clone(),
        "tools.git" => config.tools.git.clone(),
        "tools.premake" => config.tools.premake.clone(),
        "tools.msbuild" => config.tools.msbuild.clone(),
        "output.no_color" => config.output.no_color.to_string(),
        "output.format" => config.output.format.clone(),
        _ => {
            return Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            });
        }
    };
    Ok(value)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.architecture").unwrap(), "x64");
        assert_eq!(get_config_value(&cfg, "tools.premake").unwrap(), "premake5");
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }
}
