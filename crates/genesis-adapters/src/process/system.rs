//! Runs external tools with `std::process`.

use std::process::{Command, Stdio};

use genesis_core::{
    application::{
        ApplicationError,
        ports::{CommandSpec, ProcessRunner, ProcessStatus},
    },
    error::GenesisResult,
};
use tracing::{debug, instrument};

/// Production runner. The child inherits stdin, stdout, and stderr so tool
/// output streams straight to the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    #[instrument(skip_all, fields(command = %command))]
    fn run(&self, command: &CommandSpec) -> GenesisResult<ProcessStatus> {
        let mut process = Command::new(&command.program);
        process
            .args(&command.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(cwd) = &command.cwd {
            process.current_dir(cwd);
        }

        let status = process
            .status()
            .map_err(|e| ApplicationError::ExternalTool {
                program: command.program.clone(),
                reason: e.to_string(),
            })?;

        debug!(code = ?status.code(), "Process exited");
        Ok(ProcessStatus {
            code: status.code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genesis_core::error::{ErrorCategory, GenesisError};

    #[test]
    fn missing_program_is_an_external_tool_error() {
        let err = SystemProcessRunner::new()
            .run(&CommandSpec::new("genesis-definitely-not-a-real-tool"))
            .unwrap_err();

        assert!(matches!(
            err,
            GenesisError::Application(ApplicationError::ExternalTool { ref program, .. })
                if program == "genesis-definitely-not-a-real-tool"
        ));
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[cfg(unix)]
    #[test]
    fn exit_code_is_propagated() {
        let runner = SystemProcessRunner::new();

        let ok = runner.run(&CommandSpec::new("true")).unwrap();
        let failed = runner.run(&CommandSpec::new("false")).unwrap();

        assert!(ok.success());
        assert_eq!(failed.code, Some(1));
    }

    #[cfg(unix)]
    #[test]
    fn runs_in_requested_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let status = SystemProcessRunner::new()
            .run(
                &CommandSpec::new("sh")
                    .arg("-c")
                    .arg("test -f marker")
                    .current_dir(dir.path()),
            )
            .unwrap();
        assert!(!status.success());

        std::fs::write(dir.path().join("marker"), "").unwrap();
        let status = SystemProcessRunner::new()
            .run(
                &CommandSpec::new("sh")
                    .arg("-c")
                    .arg("test -f marker")
                    .current_dir(dir.path()),
            )
            .unwrap();
        assert!(status.success());
    }
}
