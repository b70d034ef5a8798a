//! CLI integration tests using the REAL brandkit binary

mod common;

use common::TestWorkspace;
use predicates::prelude::*;

#[test]
fn test_help_output() {
    TestWorkspace::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("package"));
}

#[test]
fn test_version_output() {
    TestWorkspace::new()
        .cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("brandkit"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_completions_bash() {
    TestWorkspace::new()
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("brandkit"));
}

#[test]
fn test_completions_unknown_shell() {
    TestWorkspace::new()
        .cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}

#[test]
fn test_missing_explicit_config_fails() {
    TestWorkspace::new()
        .cmd()
        .args(["--config", "nope.yaml", "validate", "acme"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_unknown_config_key_fails() {
    let workspace = TestWorkspace::new();
    workspace.write_file("brandkit.yaml", "colour: blue\n");
    workspace
        .cmd()
        .args(["init", "Acme"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse configuration file"));
    assert!(!workspace.file_exists("brand-skills/acme"));
}

#[test]
fn test_config_file_sets_base_path() {
    let workspace = TestWorkspace::new();
    workspace.write_file("brandkit.yaml", "path: skills\n");
    workspace.cmd().args(["init", "Acme"]).assert().success();
    assert!(workspace.file_exists("skills/acme/SKILL.md"));
}

#[test]
fn test_env_overrides_config_file() {
    let workspace = TestWorkspace::new();
    workspace.write_file("brandkit.yaml", "path: skills\n");
    workspace
        .cmd()
        .env("BRANDKIT_PATH", "from-env")
        .args(["init", "Acme"])
        .assert()
        .success();
    assert!(workspace.file_exists("from-env/acme/SKILL.md"));
    assert!(!workspace.file_exists("skills/acme"));
}

#[test]
fn test_flag_overrides_env() {
    let workspace = TestWorkspace::new();
    workspace
        .cmd()
        .env("BRANDKIT_PATH", "from-env")
        .args(["init", "Acme", "--path", "from-flag"])
        .assert()
        .success();
    assert!(workspace.file_exists("from-flag/acme/SKILL.md"));
}
