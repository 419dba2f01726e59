//! End-to-end tests of the `genesis` binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// `genesis` running in `dir`, isolated from the user's config and env.
fn genesis(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("genesis").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

fn workspace(name: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    genesis(dir.path()).args(["init", name]).assert().success();
    dir
}

fn document(dir: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(dir.join("genesis.json")).unwrap()).unwrap()
}

// ── surface ───────────────────────────────────────────────────────────────────

#[test]
fn help_lists_every_command() {
    let dir = TempDir::new().unwrap();
    genesis(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("module"))
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("build"));
}

#[test]
fn no_arguments_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    genesis(dir.path()).assert().code(2);
}

#[test]
fn completions_are_generated() {
    let dir = TempDir::new().unwrap();
    genesis(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("genesis"));
}

// ── init / project / module ───────────────────────────────────────────────────

#[test]
fn init_writes_an_empty_workspace() {
    let dir = workspace("Engine");

    let doc = document(dir.path());
    assert_eq!(doc["name"], "Engine");
    assert_eq!(doc["projects"], serde_json::json!({}));
    assert_eq!(doc["modules"], serde_json::json!({}));
}

#[test]
fn init_refuses_to_replace_without_force() {
    let dir = workspace("Engine");

    genesis(dir.path())
        .args(["init", "Other"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));
    assert_eq!(document(dir.path())["name"], "Engine");

    genesis(dir.path())
        .args(["init", "Other", "--force"])
        .assert()
        .success();
    assert_eq!(document(dir.path())["name"], "Other");
}

#[test]
fn project_is_registered_under_its_group() {
    let dir = workspace("Engine");

    genesis(dir.path())
        .args(["project", "--group", "Core", "--name", "Runtime", "--type", "static-lib"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Core-Runtime"));

    let runtime = &document(dir.path())["projects"]["Core"]["Runtime"];
    assert_eq!(runtime["type"], "StaticLib");
    assert_eq!(runtime["includeDirs"][0], "%{wks.location}/Core/src/Runtime/");
}

#[test]
fn project_without_type_needs_the_flag_when_not_interactive() {
    let dir = workspace("Engine");

    genesis(dir.path())
        .args(["project", "--group", "Core", "--name", "Runtime"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--type"));
}

#[test]
fn duplicate_project_is_a_conflict() {
    let dir = workspace("Engine");
    let add = ["project", "--group", "Core", "--name", "Runtime", "--type", "static-lib"];

    genesis(dir.path()).args(add).assert().success();
    genesis(dir.path())
        .args(add)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn reserved_project_name_is_refused_and_workspace_stays_readable() {
    let dir = workspace("Engine");

    genesis(dir.path())
        .args(["project", "-g", "Core", "-n", "type", "-t", "console-app"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("reserved"));

    genesis(dir.path())
        .args(["project", "-g", "Core", "-n", "Runtime", "-t", "static-lib"])
        .assert()
        .success();
}

#[test]
fn module_records_packet_and_library() {
    let dir = workspace("Engine");

    genesis(dir.path())
        .args(["module", "glfw", "--repo", "https://github.com/glfw/glfw.git"])
        .assert()
        .success();

    let glfw = &document(dir.path())["modules"]["glfw"];
    assert_eq!(glfw["type"], "premake");
    assert_eq!(glfw["includeDirs"], serde_json::json!(["include/"]));
    assert_eq!(glfw["packet"]["type"], "git-clone");
    assert_eq!(glfw["packet"]["repo"], "https://github.com/glfw/glfw.git");
    assert_eq!(glfw["library"]["script"], "%{wks.location}/.genesis/glfw.lua");
}

#[test]
fn module_without_repo_needs_the_flag_when_not_interactive() {
    let dir = workspace("Engine");

    genesis(dir.path())
        .args(["module", "glfw"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--repo"));
}

// ── generate ──────────────────────────────────────────────────────────────────

#[test]
fn generate_without_name_lists_generators() {
    let dir = TempDir::new().unwrap();
    genesis(dir.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("vscode"))
        .stdout(predicate::str::contains("premake"));
}

#[test]
fn generator_listing_as_json() {
    let dir = TempDir::new().unwrap();
    let output = genesis(dir.path())
        .args(["--output-format", "json", "gen"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let listed: Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<_> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["name"].as_str().unwrap().to_string())
        .collect();
    assert!(names.contains(&"vscode".to_string()));
    assert!(names.contains(&"premake".to_string()));
}

#[test]
fn vscode_generator_writes_launch_and_tasks() {
    let dir = workspace("Engine");
    genesis(dir.path())
        .args(["project", "-g", "Core", "-n", "Runtime", "-t", "static-lib"])
        .assert()
        .success();
    genesis(dir.path())
        .args(["project", "-g", "Apps", "-n", "Editor", "-t", "console-app"])
        .assert()
        .success();

    genesis(dir.path())
        .args(["generate", "vscode", "--configuration", "Release"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Done!"));

    let launch: Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join(".vscode/launch.json")).unwrap(),
    )
    .unwrap();
    let configurations = launch["configurations"].as_array().unwrap();
    assert_eq!(configurations.len(), 1);
    assert_eq!(configurations[0]["name"], "Apps-Editor-Release");
    assert!(dir.path().join(".vscode/tasks.json").is_file());
}

#[test]
fn unknown_generator_is_not_found_and_lists_alternatives() {
    let dir = workspace("Engine");

    genesis(dir.path())
        .args(["generate", "ninja"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("ninja"))
        .stderr(predicate::str::contains("vscode"));
}

#[test]
fn rejected_options_write_nothing() {
    let dir = workspace("Engine");

    genesis(dir.path())
        .args(["generate", "vscode", "--arch", "arm99"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Failed!"))
        .stderr(predicate::str::contains("arm99"));
    assert!(!dir.path().join(".vscode").exists());
}

// ── install / clean / build ───────────────────────────────────────────────────

#[test]
fn operations_outside_a_workspace_are_not_found() {
    let dir = TempDir::new().unwrap();

    for command in ["install", "clean"] {
        genesis(dir.path())
            .arg(command)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("genesis init"));
    }
}

#[test]
fn install_with_no_modules_succeeds() {
    let dir = workspace("Engine");
    genesis(dir.path())
        .arg("i")
        .assert()
        .success()
        .stdout(predicate::str::contains("Done!"));
}

#[test]
fn clean_removes_build_output() {
    let dir = workspace("Engine");
    let bin = dir.path().join("bin/Debug/App");
    std::fs::create_dir_all(&bin).unwrap();
    std::fs::write(bin.join("App.exe"), "").unwrap();
    std::fs::write(dir.path().join("Engine.sln"), "").unwrap();

    genesis(dir.path())
        .arg("clean")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed bin"));

    assert!(!dir.path().join("bin").exists());
    assert!(!dir.path().join("Engine.sln").exists());
    assert!(dir.path().join("genesis.json").exists());
}

#[test]
fn build_validates_architecture_before_running_msbuild() {
    let dir = workspace("Engine");

    genesis(dir.path())
        .args(["build", "--arch", "arm99"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("arm99"));
}
