//! Process runner that records commands instead of running them.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use genesis_core::{
    application::{
        ApplicationError,
        ports::{CommandSpec, ProcessRunner, ProcessStatus},
    },
    error::GenesisResult,
};

#[derive(Debug, Default)]
struct RecordingInner {
    commands: Vec<CommandSpec>,
    exit_codes: HashMap<String, i32>,
}

/// Test runner: every command succeeds unless an exit code was configured
/// for its program. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    inner: Arc<RwLock<RecordingInner>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every invocation of `program` exit with `code`.
    pub fn with_exit_code(self, program: impl Into<String>, code: i32) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.exit_codes.insert(program.into(), code);
        }
        self
    }

    /// Every command run so far, in order.
    pub fn commands(&self) -> Vec<CommandSpec> {
        self.inner
            .read()
            .map(|inner| inner.commands.clone())
            .unwrap_or_default()
    }

    /// Commands rendered as command lines.
    pub fn command_lines(&self) -> Vec<String> {
        self.commands().iter().map(ToString::to_string).collect()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, command: &CommandSpec) -> GenesisResult<ProcessStatus> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.commands.push(command.clone());
        let code = inner.exit_codes.get(&command.program).copied().unwrap_or(0);
        Ok(ProcessStatus::exited(code))
    }
}
