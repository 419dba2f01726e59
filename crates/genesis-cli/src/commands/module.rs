//! `genesis module` — register a git-cloned premake module.

use genesis_core::application::{
    ModuleRegistration, services::workspace_service::DEFAULT_MODULE_INCLUDE,
};

use crate::{
    cli::ModuleArgs,
    error::CliResult,
    output::OutputManager,
    prompt,
    session::Session,
};

pub fn execute(args: ModuleArgs, session: Session, output: OutputManager) -> CliResult<()> {
    let repo = prompt::required(args.repo, "--repo", "Enter your repo url")?;
    let name = prompt::required(args.name, "NAME", "Enter the name of the module")?;
    let includes = prompt::with_default(
        args.include,
        "Enter the include directory for your module",
        DEFAULT_MODULE_INCLUDE.into(),
    )?;
    let script = prompt::with_default(
        args.script,
        "Enter the script name of the library",
        ModuleRegistration::default_script(&name),
    )?;

    let registration = ModuleRegistration::new(&name)
        .with_repo(repo)
        .with_includes(includes)
        .with_script(script);

    session.workspace().add_module(registration)?;
    output.success(&format!("Module {name} added successfully!"))?;
    output.info("Run 'genesis install' to fetch it")?;
    Ok(())
}
