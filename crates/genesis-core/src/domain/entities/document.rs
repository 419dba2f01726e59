//! The persisted workspace description.
//!
//! `projects` and `modules` accept two shapes: a flat mapping of entries, or
//! a mapping of groups each holding entries. The shape of every node is
//! decided once, at parse time, by probing for the `type` field:
//!
//! ```json
//! {
//!     "name": "Engine",
//!     "projects": {
//!         "Tools": { "type": "ConsoleApp" },
//!         "Core": {
//!             "Runtime": { "type": "StaticLib" },
//!             "Sandbox": { "type": "ConsoleApp" }
//!         }
//!     },
//!     "modules": {}
//! }
//! ```
//!
//! Nodes that fit neither shape are kept verbatim as `Malformed` so the
//! document still round-trips; flattening is what rejects them.

use std::collections::BTreeSet;
use std::fmt;

use indexmap::{IndexMap, map::Entry as MapEntry};
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::domain::{error::DomainError, validation::DomainValidator, value_objects::ProjectKind};

/// Field whose presence marks a node as a leaf entity.
pub const DISCRIMINATOR: &str = "type";

/// Keys that mark a leaf in some section; never valid as identifiers.
pub const RESERVED_KEYS: [&str; 2] = [DISCRIMINATOR, "packet"];

/// An entity that can sit at a leaf of `projects` or `modules`.
pub trait LeafEntity: DeserializeOwned {
    /// Fields whose presence makes a node a leaf of this entity.
    const LEAF_FIELDS: &'static [&'static str];

    fn is_leaf(value: &Value) -> bool {
        value
            .as_object()
            .is_some_and(|map| Self::LEAF_FIELDS.iter().any(|f| map.contains_key(*f)))
    }
}

/// Which top-level mapping of the document an entry lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Projects,
    Modules,
}

impl Section {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Modules => "modules",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Flat-or-grouped nodes ────────────────────────────────────────────────────

/// A top-level node of `projects` or `modules`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entry<T> {
    /// An entity stored directly under its identifier.
    Leaf(T),
    /// One level of grouping.
    Group(IndexMap<String, Member<T>>),
    /// Neither an entity nor a mapping.
    Malformed(Value),
}

/// A node inside a group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Member<T> {
    Leaf(T),
    /// Anything without a discriminator, including a further nested mapping.
    Malformed(Value),
}

impl<T: LeafEntity> Entry<T> {
    fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if T::is_leaf(&value) {
            return serde_json::from_value(value).map(Self::Leaf);
        }
        match value {
            Value::Object(map) => map
                .into_iter()
                .map(|(key, value)| Member::from_value(value).map(|member| (key, member)))
                .collect::<Result<IndexMap<_, _>, _>>()
                .map(Self::Group),
            other => Ok(Self::Malformed(other)),
        }
    }
}

impl<T: LeafEntity> Member<T> {
    fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if T::is_leaf(&value) {
            serde_json::from_value(value).map(Self::Leaf)
        } else {
            Ok(Self::Malformed(value))
        }
    }
}

impl<'de, T: LeafEntity> Deserialize<'de> for Entry<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl<'de, T: LeafEntity> Deserialize<'de> for Member<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

// ── Entities ─────────────────────────────────────────────────────────────────

fn is_false(value: &bool) -> bool {
    !*value
}

/// A buildable unit: a static library or a console application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Free-form in the file, see [`Project::project_kind`].
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Path templates such as `%{wks.location}/Core/src/Runtime/`.
    #[serde(default)]
    pub include_dirs: Vec<String>,

    #[serde(default)]
    pub dependencies: BTreeSet<String>,

    /// Excluded from generators that enumerate runnable targets.
    #[serde(default, skip_serializing_if = "is_false")]
    pub hide: bool,
}

impl LeafEntity for Project {
    const LEAF_FIELDS: &'static [&'static str] = &[DISCRIMINATOR];
}

impl Project {
    pub fn new(kind: ProjectKind) -> Self {
        Self {
            kind: kind.as_str().to_string(),
            alias: None,
            include_dirs: Vec::new(),
            dependencies: BTreeSet::new(),
            hide: false,
        }
    }

    pub fn with_include_dir(mut self, dir: impl Into<String>) -> Self {
        self.include_dirs.push(dir.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hide = true;
        self
    }

    /// The parsed project type, `None` for values outside the known set.
    pub fn project_kind(&self) -> Option<ProjectKind> {
        self.kind.parse().ok()
    }

    /// Whether generators should offer this project as a launch target.
    pub fn is_runnable(&self) -> bool {
        !self.hide && self.project_kind() == Some(ProjectKind::ConsoleApp)
    }
}

/// An external dependency: how to acquire it and how to wire it in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// Library integration mechanism, currently always `premake`.
    #[serde(rename = "type", default = "default_module_kind")]
    pub kind: String,

    #[serde(default)]
    pub include_dirs: Vec<String>,

    #[serde(default)]
    pub dependencies: BTreeSet<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packet: Option<Packet>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<Library>,
}

fn default_module_kind() -> String {
    "premake".into()
}

/// A module is a leaf when it names its integration or carries a packet.
impl LeafEntity for Module {
    const LEAF_FIELDS: &'static [&'static str] = &[DISCRIMINATOR, "packet"];
}

impl Module {
    /// A premake-integrated module.
    pub fn premake() -> Self {
        Self {
            kind: default_module_kind(),
            include_dirs: Vec::new(),
            dependencies: BTreeSet::new(),
            script: None,
            packet: None,
            library: None,
        }
    }

    /// Set include directories from a comma-separated list.
    ///
    /// Entries are trimmed and empty entries dropped.
    pub fn with_includes(mut self, list: &str) -> Self {
        self.include_dirs = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        self
    }

    pub fn with_packet(mut self, packet: Packet) -> Self {
        self.packet = Some(packet);
        self
    }

    pub fn with_library(mut self, library: Library) -> Self {
        self.library = Some(library);
        self
    }
}

/// How a module's sources are acquired.
///
/// Unknown kinds are kept verbatim and skipped by install.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Packet {
    Supported(PacketSource),
    Unsupported(Value),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PacketSource {
    #[serde(rename = "git-clone")]
    GitClone { repo: String },
}

impl Packet {
    pub fn git_clone(repo: impl Into<String>) -> Self {
        Self::Supported(PacketSource::GitClone { repo: repo.into() })
    }

    /// The declared `type`, if any.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::Supported(PacketSource::GitClone { .. }) => Some("git-clone"),
            Self::Unsupported(value) => value.get(DISCRIMINATOR).and_then(Value::as_str),
        }
    }
}

/// How a module is wired into the build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Library {
    Supported(LibrarySource),
    Unsupported(Value),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LibrarySource {
    Premake { script: String },
}

impl Library {
    pub fn premake(script: impl Into<String>) -> Self {
        Self::Supported(LibrarySource::Premake {
            script: script.into(),
        })
    }
}

// ── Document ─────────────────────────────────────────────────────────────────

/// In-memory form of `genesis.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceDocument {
    pub name: String,

    #[serde(default)]
    pub projects: IndexMap<String, Entry<Project>>,

    #[serde(default)]
    pub modules: IndexMap<String, Entry<Module>>,
}

impl WorkspaceDocument {
    /// An empty workspace.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            projects: IndexMap::new(),
            modules: IndexMap::new(),
        }
    }

    /// Register `project` as `group/name`, creating the group when needed.
    pub fn add_project(
        &mut self,
        group: &str,
        name: &str,
        project: Project,
    ) -> Result<(), DomainError> {
        DomainValidator::validate_identifier(group)?;
        DomainValidator::validate_identifier(name)?;
        let id = composite_id(group, name);
        if composite_ids(&self.projects).any(|existing| existing == id) {
            if let Some(Entry::Group(members)) = self.projects.get(group) {
                if members.contains_key(name) {
                    return Err(DomainError::ProjectExists {
                        group: group.into(),
                        name: name.into(),
                    });
                }
            }
            return Err(DomainError::DuplicateIdentifier {
                section: Section::Projects,
                id,
            });
        }

        match self.projects.entry(group.to_string()) {
            MapEntry::Vacant(slot) => {
                let mut members = IndexMap::new();
                members.insert(name.to_string(), Member::Leaf(project));
                slot.insert(Entry::Group(members));
                Ok(())
            }
            MapEntry::Occupied(mut slot) => match slot.get_mut() {
                Entry::Group(members) => {
                    members.insert(name.to_string(), Member::Leaf(project));
                    Ok(())
                }
                Entry::Leaf(_) | Entry::Malformed(_) => Err(DomainError::NotAGroup {
                    section: Section::Projects,
                    key: group.into(),
                }),
            },
        }
    }

    /// Register a top-level module.
    pub fn add_module(&mut self, name: &str, module: Module) -> Result<(), DomainError> {
        DomainValidator::validate_identifier(name)?;
        if self.modules.contains_key(name) {
            return Err(DomainError::ModuleExists { name: name.into() });
        }
        if composite_ids(&self.modules).any(|existing| existing == name) {
            return Err(DomainError::DuplicateIdentifier {
                section: Section::Modules,
                id: name.into(),
            });
        }
        self.modules.insert(name.to_string(), Entry::Leaf(module));
        Ok(())
    }

    /// Total number of well-formed projects, grouped or not.
    pub fn project_count(&self) -> usize {
        composite_ids(&self.projects).count()
    }
}

/// Key under which a grouped entry appears once flattened.
pub fn composite_id(group: &str, name: &str) -> String {
    format!("{group}-{name}")
}

/// Flattened identifiers of every well-formed node, malformed nodes skipped.
fn composite_ids<T>(entries: &IndexMap<String, Entry<T>>) -> impl Iterator<Item = String> + '_ {
    entries.iter().flat_map(|(key, entry)| {
        let ids: Vec<String> = match entry {
            Entry::Leaf(_) => vec![key.clone()],
            Entry::Group(members) => members
                .iter()
                .filter(|(_, member)| matches!(member, Member::Leaf(_)))
                .map(|(name, _)| composite_id(key, name))
                .collect(),
            Entry::Malformed(_) => Vec::new(),
        };
        ids
    })
}
