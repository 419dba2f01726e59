//! Implementation of the `genesis install` command.

use crate::{
    commands::exit_description,
    error::{CliError, CliResult},
    output::OutputManager,
    session::Session,
};

pub fn execute(session: Session, output: OutputManager) -> CliResult<()> {
    output.timed(|| {
        let report = session.install().install()?;

        for module in &report.cloned {
            output.success(&format!("Installed {module}"))?;
        }
        for module in &report.skipped {
            output.info(&format!("Skipped {module}"))?;
        }
        for failed in &report.failed {
            output.error(&format!(
                "{}: '{}' failed with {}",
                failed.module,
                failed.command,
                exit_description(failed.code)
            ))?;
        }

        if report.is_success() {
            Ok(())
        } else {
            Err(CliError::OperationFailed {
                operation: "install".into(),
                reason: format!("{} module(s) could not be cloned", report.failed.len()),
            })
        }
    })
}
