//! Hierarchy flattening.
//!
//! Collapses the optional grouping level of `projects` and `modules` into a
//! single mapping keyed by composite identifiers (`<group>-<name>`). The
//! result is recomputed from the loaded document on every operation and never
//! cached.

use indexmap::{IndexMap, map::Entry as MapEntry};
use tracing::{debug, instrument};

use crate::domain::{
    entities::document::{
        Entry, Member, Module, Project, Section, WorkspaceDocument, composite_id,
    },
    error::DomainError,
};

/// Mapping from flattened identifier to entity, in document order.
pub type FlatMap<T> = IndexMap<String, T>;

/// The flattened view every generator consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatWorkspace {
    pub name: String,
    pub projects: FlatMap<Project>,
    pub modules: FlatMap<Module>,
}

impl FlatWorkspace {
    /// Flatten both sections of `doc`.
    ///
    /// Fails on the first malformed node or identifier collision; there is no
    /// partial result.
    #[instrument(skip_all, fields(workspace = %doc.name))]
    pub fn from_document(doc: &WorkspaceDocument) -> Result<Self, DomainError> {
        let projects = flatten_section(Section::Projects, &doc.projects)?;
        let modules = flatten_section(Section::Modules, &doc.modules)?;

        debug!(
            projects = projects.len(),
            modules = modules.len(),
            "Workspace flattened"
        );

        Ok(Self {
            name: doc.name.clone(),
            projects,
            modules,
        })
    }

    /// Projects that generators should offer as launch targets.
    pub fn runnable_projects(&self) -> impl Iterator<Item = (&str, &Project)> {
        self.projects
            .iter()
            .filter(|(_, project)| project.is_runnable())
            .map(|(id, project)| (id.as_str(), project))
    }
}

impl WorkspaceDocument {
    /// Shorthand for [`FlatWorkspace::from_document`].
    pub fn flatten(&self) -> Result<FlatWorkspace, DomainError> {
        FlatWorkspace::from_document(self)
    }
}

/// Flatten one section. Depth is fixed at two levels.
pub fn flatten_section<T: Clone>(
    section: Section,
    entries: &IndexMap<String, Entry<T>>,
) -> Result<FlatMap<T>, DomainError> {
    let mut flat = FlatMap::with_capacity(entries.len());

    for (key, entry) in entries {
        match entry {
            Entry::Leaf(entity) => insert_unique(&mut flat, section, key.clone(), entity)?,
            Entry::Group(members) => {
                for (name, member) in members {
                    match member {
                        Member::Leaf(entity) => {
                            insert_unique(&mut flat, section, composite_id(key, name), entity)?
                        }
                        Member::Malformed(_) => {
                            return Err(DomainError::MalformedEntry {
                                section,
                                path: format!("{key}/{name}"),
                            });
                        }
                    }
                }
            }
            Entry::Malformed(_) => {
                return Err(DomainError::MalformedEntry {
                    section,
                    path: key.clone(),
                });
            }
        }
    }

    Ok(flat)
}

fn insert_unique<T: Clone>(
    flat: &mut FlatMap<T>,
    section: Section,
    id: String,
    entity: &T,
) -> Result<(), DomainError> {
    match flat.entry(id) {
        MapEntry::Occupied(slot) => Err(DomainError::DuplicateIdentifier {
            section,
            id: slot.key().clone(),
        }),
        MapEntry::Vacant(slot) => {
            slot.insert(entity.clone());
            Ok(())
        }
    }
}
