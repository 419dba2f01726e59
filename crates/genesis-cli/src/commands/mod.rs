//! One module per subcommand.

pub mod build;
pub mod clean;
pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod install;
pub mod module;
pub mod project;

/// Human wording for a child process exit code.
fn exit_description(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by a signal".to_string(),
    }
}
