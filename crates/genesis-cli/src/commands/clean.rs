//! `genesis clean` — delete build output and generated project files.

use crate::{error::CliResult, output::OutputManager, session::Session};

pub fn execute(session: Session, output: OutputManager) -> CliResult<()> {
    output.timed(|| {
        let report = session.clean().clean()?;

        for path in &report.removed {
            let shown = path.strip_prefix(session.root()).unwrap_or(path.as_path());
            output.print(&format!("Removed {}", shown.display()))?;
        }
        if report.removed.is_empty() {
            output.info("Nothing to clean")?;
        }
        Ok(())
    })
}
