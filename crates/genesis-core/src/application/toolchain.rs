//! Names of the external programs Genesis drives.

/// Program names for each external tool.
///
/// Resolved through `PATH` by the process runner, so each entry may be a bare
/// name or an absolute path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    /// Version control client used by `install`.
    pub git: String,
    /// Project-file generator used by the `premake` generator.
    pub premake: String,
    /// Build driver used by `build` and the generated editor tasks.
    pub msbuild: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            git: "git".into(),
            premake: "premake5".into(),
            msbuild: "msbuild".into(),
        }
    }
}
