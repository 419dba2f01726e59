//! Implementation of the `genesis project` command.

use genesis_core::application::ProjectRegistration;

use crate::{
    cli::{ProjectArgs, ProjectType},
    error::CliResult,
    output::OutputManager,
    prompt,
    session::Session,
};

const DEFAULT_NAME: &str = "Project";
const DEFAULT_GROUP: &str = "Group";

const TYPES: [(&str, ProjectType); 2] = [
    ("StaticLib", ProjectType::StaticLib),
    ("ConsoleApp", ProjectType::ConsoleApp),
];

pub fn execute(args: ProjectArgs, session: Session, output: OutputManager) -> CliResult<()> {
    let name = prompt::with_default(
        args.name,
        "Enter the name of your project",
        DEFAULT_NAME.into(),
    )?;
    let group = prompt::with_default(
        args.group,
        "Enter the group of your project",
        DEFAULT_GROUP.into(),
    )?;
    let kind = prompt::choose(args.kind, "--type", "Choose the type of your project", &TYPES)?;

    let mut registration = ProjectRegistration::new(group, name, kind.into());
    if args.no_include {
        registration = registration.without_includes();
    }

    let id = session.workspace().add_project(registration)?;
    output.success(&format!("Project {id} added successfully!"))?;
    Ok(())
}
