//! Install Service - acquire module sources.
//!
//! Every flattened module with a `git-clone` packet is cloned into
//! `./.genesis/modules/<id>`. Modules are processed in document order, one
//! process at a time.

use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        Toolchain,
        ports::{CommandSpec, Filesystem, ProcessRunner, WorkspaceStore},
        services::load_workspace,
    },
    domain::{Packet, PacketSource},
    error::GenesisResult,
};

/// Where installed modules live, relative to the workspace root.
pub const MODULES_DIR: &str = ".genesis/modules";

/// A module whose acquisition command failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedInstall {
    pub module: String,
    pub command: String,
    pub code: Option<i32>,
}

/// Outcome of one `install` run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Modules cloned by this run.
    pub cloned: Vec<String>,
    /// Modules with no supported packet or already present on disk.
    pub skipped: Vec<String>,
    pub failed: Vec<FailedInstall>,
}

impl InstallReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Service that runs the acquisition step of every module.
pub struct InstallService {
    store: Box<dyn WorkspaceStore>,
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn ProcessRunner>,
    toolchain: Toolchain,
    root: PathBuf,
}

impl InstallService {
    pub fn new(
        store: Box<dyn WorkspaceStore>,
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn ProcessRunner>,
        toolchain: Toolchain,
        root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store,
            filesystem,
            runner,
            toolchain,
            root: root.into(),
        }
    }

    /// Clone every module that is not installed yet.
    ///
    /// A failing clone does not stop the remaining modules; it is recorded
    /// in the report. A tool that cannot be started aborts the run.
    #[instrument(skip_all, fields(root = %self.root.display()))]
    pub fn install(&self) -> GenesisResult<InstallReport> {
        let workspace = load_workspace(self.store.as_ref())?.flatten()?;
        let mut report = InstallReport::default();

        for (id, module) in &workspace.modules {
            let repo = match &module.packet {
                Some(Packet::Supported(PacketSource::GitClone { repo })) => repo,
                Some(other) => {
                    debug!(module = %id, kind = ?other.kind(), "Unsupported packet, skipping");
                    report.skipped.push(id.clone());
                    continue;
                }
                None => {
                    debug!(module = %id, "No packet, skipping");
                    report.skipped.push(id.clone());
                    continue;
                }
            };

            if self.filesystem.exists(&self.root.join(MODULES_DIR).join(id)) {
                info!(module = %id, "Already installed");
                report.skipped.push(id.clone());
                continue;
            }

            let command = CommandSpec::new(&self.toolchain.git)
                .arg("clone")
                .arg(repo)
                .arg(format!("./{MODULES_DIR}/{id}"))
                .current_dir(&self.root);

            info!(module = %id, command = %command, "Cloning module");
            let status = self.runner.run(&command)?;

            if status.success() {
                report.cloned.push(id.clone());
            } else {
                warn!(module = %id, code = ?status.code, "Clone failed");
                report.failed.push(FailedInstall {
                    module: id.clone(),
                    command: command.to_string(),
                    code: status.code,
                });
            }
        }

        info!(
            cloned = report.cloned.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "Install finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::{
            ports::{MockProcessRunner, ProcessStatus},
            testing::{FakeFilesystem, FakeStore},
        },
        error::ErrorCategory,
    };
    use std::path::Path;

    fn service(store: FakeStore, fs: FakeFilesystem, runner: MockProcessRunner) -> InstallService {
        InstallService::new(
            Box::new(store),
            Box::new(fs),
            Box::new(runner),
            Toolchain::default(),
            "/ws",
        )
    }

    #[test]
    fn git_clone_module_is_cloned_exactly_once_into_modules_dir() {
        let store = FakeStore::parse(
            r#"{"name":"Demo","modules":{"glfw":{"type":"premake","includeDirs":[],
                "packet":{"type":"git-clone","repo":"https://example/glfw.git"}}}}"#,
        );
        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .withf(|cmd| {
                cmd.program == "git"
                    && cmd.args == ["clone", "https://example/glfw.git", "./.genesis/modules/glfw"]
                    && cmd.cwd.as_deref() == Some(Path::new("/ws"))
            })
            .times(1)
            .returning(|_| Ok(ProcessStatus::exited(0)));

        let report = service(store, FakeFilesystem::default(), runner)
            .install()
            .unwrap();

        assert_eq!(report.cloned, ["glfw"]);
        assert!(report.skipped.is_empty());
        assert!(report.is_success());
    }

    #[test]
    fn modules_without_supported_packet_are_skipped() {
        let store = FakeStore::parse(
            r#"{"name":"Demo","modules":{
                "local":{"type":"premake","includeDirs":[]},
                "zip":{"type":"premake","includeDirs":[],"packet":{"type":"zip","url":"x"}}}}"#,
        );
        let mut runner = MockProcessRunner::new();
        runner.expect_run().never();

        let report = service(store, FakeFilesystem::default(), runner)
            .install()
            .unwrap();

        assert!(report.cloned.is_empty());
        assert_eq!(report.skipped, ["local", "zip"]);
    }

    #[test]
    fn existing_destination_is_not_cloned_again() {
        let store = FakeStore::parse(
            r#"{"name":"Demo","modules":{"glfw":{"type":"premake","includeDirs":[],
                "packet":{"type":"git-clone","repo":"https://example/glfw.git"}}}}"#,
        );
        let fs = FakeFilesystem::default().with_file("/ws/.genesis/modules/glfw", "");
        let mut runner = MockProcessRunner::new();
        runner.expect_run().never();

        let report = service(store, fs, runner).install().unwrap();

        assert_eq!(report.skipped, ["glfw"]);
    }

    #[test]
    fn failed_clone_is_reported_and_others_continue() {
        let store = FakeStore::parse(
            r#"{"name":"Demo","modules":{
                "bad":{"type":"premake","includeDirs":[],
                    "packet":{"type":"git-clone","repo":"https://example/missing.git"}},
                "good":{"type":"premake","includeDirs":[],
                    "packet":{"type":"git-clone","repo":"https://example/good.git"}}}}"#,
        );
        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .times(2)
            .returning(|cmd| {
                let code = if cmd.args[1].contains("missing") { 128 } else { 0 };
                Ok(ProcessStatus::exited(code))
            });

        let report = service(store, FakeFilesystem::default(), runner)
            .install()
            .unwrap();

        assert_eq!(report.cloned, ["good"]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].module, "bad");
        assert_eq!(report.failed[0].code, Some(128));
        assert!(!report.is_success());
    }

    #[test]
    fn grouped_modules_use_composite_destination() {
        let store = FakeStore::parse(
            r#"{"name":"Demo","modules":{"Gfx":{"glfw":{"type":"premake","includeDirs":[],
                "packet":{"type":"git-clone","repo":"r"}}}}}"#,
        );
        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .withf(|cmd| cmd.args[2] == "./.genesis/modules/Gfx-glfw")
            .times(1)
            .returning(|_| Ok(ProcessStatus::exited(0)));

        let report = service(store, FakeFilesystem::default(), runner)
            .install()
            .unwrap();
        assert_eq!(report.cloned, ["Gfx-glfw"]);
    }

    #[test]
    fn missing_workspace_is_not_found() {
        let mut runner = MockProcessRunner::new();
        runner.expect_run().never();

        let err = service(FakeStore::default(), FakeFilesystem::default(), runner)
            .install()
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }
}
