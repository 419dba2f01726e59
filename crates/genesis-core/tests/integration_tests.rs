//! Integration tests for genesis-core's public API.

use genesis_core::{
    application::{GeneratorRegistry, ModuleRegistration, ProjectRegistration},
    domain::{DomainError, Entry, Packet, Section, WorkspaceDocument},
    prelude::*,
};

const ENGINE: &str = r#"{
    "name": "Engine",
    "projects": {
        "Core": {
            "Runtime": { "type": "StaticLib", "includeDirs": ["%{wks.location}/Core/src/Runtime/"] },
            "Editor": { "type": "ConsoleApp", "dependencies": ["Core-Runtime"] }
        },
        "Sandbox": { "type": "ConsoleApp", "hide": true }
    },
    "modules": {
        "glfw": {
            "type": "premake",
            "includeDirs": ["include/"],
            "packet": { "type": "git-clone", "repo": "https://github.com/glfw/glfw.git" },
            "library": { "type": "premake", "script": "%{wks.location}/.genesis/glfw.lua" }
        },
        "vendored": {
            "type": "premake",
            "includeDirs": [],
            "packet": { "type": "svn", "url": "svn://example/vendored" }
        }
    }
}"#;

#[test]
fn flattening_mixes_grouped_and_flat_entries_in_order() {
    let doc: WorkspaceDocument = serde_json::from_str(ENGINE).unwrap();
    let flat = doc.flatten().unwrap();

    let ids: Vec<_> = flat.projects.keys().map(String::as_str).collect();
    assert_eq!(ids, ["Core-Runtime", "Core-Editor", "Sandbox"]);

    let runnable: Vec<_> = flat.runnable_projects().map(|(id, _)| id).collect();
    assert_eq!(runnable, ["Core-Editor"]);

    assert_eq!(flat.modules.len(), 2);
    assert_eq!(
        flat.modules["vendored"].packet.as_ref().and_then(Packet::kind),
        Some("svn")
    );
}

#[test]
fn unknown_nodes_survive_a_round_trip() {
    let json = r#"{"name":"Engine","projects":{"Loose":42,"G":{"P":{"X":{"type":"ConsoleApp"}}}},
        "modules":{"m":{"type":"premake","includeDirs":[],"packet":{"type":"zip","url":"u"}}}}"#;

    let doc: WorkspaceDocument = serde_json::from_str(json).unwrap();
    let reparsed: WorkspaceDocument =
        serde_json::from_str(&serde_json::to_string(&doc).unwrap()).unwrap();

    assert_eq!(doc, reparsed);
    assert!(matches!(doc.projects["Loose"], Entry::Malformed(_)));
}

#[test]
fn flattening_rejects_first_malformed_node() {
    let json = r#"{"name":"Engine","projects":{"G":{"P":{"X":{"type":"ConsoleApp"}}}}}"#;
    let doc: WorkspaceDocument = serde_json::from_str(json).unwrap();

    assert_eq!(
        doc.flatten().unwrap_err(),
        DomainError::MalformedEntry {
            section: Section::Projects,
            path: "G/P".into(),
        }
    );
}

#[test]
fn colliding_composite_keys_are_rejected() {
    let json = r#"{"name":"Engine","projects":{
        "A-B":{"type":"ConsoleApp"},
        "A":{"B":{"type":"StaticLib"}}}}"#;
    let doc: WorkspaceDocument = serde_json::from_str(json).unwrap();

    assert!(matches!(
        doc.flatten(),
        Err(DomainError::DuplicateIdentifier { ref id, .. }) if id == "A-B"
    ));
}

#[test]
fn registrations_build_the_documented_shape() {
    let project = ProjectRegistration::new("Core", "Runtime", ProjectKind::StaticLib);
    assert_eq!(project.include_dir(), "%{wks.location}/Core/src/Runtime/");

    let module = ModuleRegistration::new("glfw");
    assert_eq!(module.includes, "include/");
    assert_eq!(
        ModuleRegistration::default_script("glfw"),
        "%{wks.location}/.genesis/glfw.lua"
    );
}

#[test]
fn builtin_generators_are_discoverable() {
    let registry = GeneratorRegistry::builtin();
    assert!(registry.resolve("vscode").is_some());
    assert!(registry.resolve("Premake").is_some());
    assert!(registry.require("ninja").is_err());
}

#[test]
fn architecture_table_maps_tool_names() {
    let x64: Architecture = "x64".parse().unwrap();
    assert_eq!((x64.msbuild(), x64.premake()), ("x64", "x86_64"));

    let x86: Architecture = "x86".parse().unwrap();
    assert_eq!((x86.msbuild(), x86.premake()), ("x86", "x86"));
}
