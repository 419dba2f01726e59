//! `genesis init` — create `genesis.json` in the current directory.

use std::path::Path;

use crate::{
    cli::InitArgs,
    error::CliResult,
    output::OutputManager,
    prompt,
    session::Session,
};

const FALLBACK_NAME: &str = "Workspace";

/// Create an empty workspace document.
///
/// Replacing an existing document needs `--force` or an interactive
/// confirmation.
pub fn execute(args: InitArgs, session: Session, output: OutputManager) -> CliResult<()> {
    let workspace = session.workspace();

    let mut force = args.force;
    if !force && workspace.exists() && prompt::is_interactive() {
        if !prompt::confirm("Should your current genesis.json file be replaced?", false)? {
            output.warning("Kept the existing genesis.json")?;
            return Ok(());
        }
        force = true;
    }

    let name = prompt::with_default(
        args.name,
        "Enter the name of your workspace",
        default_name(session.root()),
    )?;

    let document = workspace.init(&name, force)?;
    output.success(&format!("Initialized empty workspace {}!", document.name))?;
    Ok(())
}

/// The directory's own name, when it is a usable identifier.
fn default_name(root: &Path) -> String {
    root.file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.starts_with('.') && !name.chars().any(char::is_whitespace))
        .unwrap_or(FALLBACK_NAME)
        .to_string()
}
