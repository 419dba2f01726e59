//! Implementation of the `genesis build` command: run msbuild on the workspace solution.

use crate::{
    cli::BuildArgs,
    commands::exit_description,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    session::Session,
};

pub fn execute(
    args: BuildArgs,
    session: Session,
    config: &AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let architecture = args
        .architecture
        .unwrap_or_else(|| config.defaults.architecture.clone());
    let configuration = args
        .configuration
        .unwrap_or_else(|| config.defaults.configuration.clone());

    output.timed(|| {
        let report = session.build().build(&architecture, &configuration)?;
        if report.is_success() {
            Ok(())
        } else {
            Err(CliError::OperationFailed {
                operation: "build".into(),
                reason: format!(
                    "'{}' failed with {}",
                    report.command,
                    exit_description(report.status.code)
                ),
            })
        }
    })
}
