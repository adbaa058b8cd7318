//! End-to-end CLI integration tests using test fixtures.
//!
//! Each fixture in `tests/fixtures/` is a small JS/TS project: a
//! `package.json` carrying the `checkImport` policy, optionally a
//! `tsconfig.json` alias manifest, and a `src/` tree.
//!
//! These tests run the CLI against each fixture and verify:
//! 1. Exit code (0=pass, 2=violations, 1=config error)
//! 2. The JSON report artifact shape and counters

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get a Command for the layerguard binary.
/// Wraps the deprecated cargo_bin to centralize the deprecation warning.
#[allow(deprecated)]
fn layerguard_cmd() -> Command {
    Command::cargo_bin("layerguard").expect("layerguard binary not found - run `cargo build` first")
}

/// Get the path to the test fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("layerguard-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

/// Run `check` against a fixture and return (exit code, parsed report).
fn run_check_on_fixture(fixture_name: &str) -> (i32, Value) {
    let fixture_path = fixtures_dir().join(fixture_name);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("report.json");

    let output = layerguard_cmd()
        .arg("--root")
        .arg(&fixture_path)
        .arg("check")
        .arg("--report-out")
        .arg(&report_path)
        .output()
        .expect("Failed to run command");

    let exit_code = output.status.code().unwrap_or(-1);
    let report_content = std::fs::read_to_string(&report_path).expect("Failed to read report");
    let report: Value = serde_json::from_str(&report_content).expect("Failed to parse report JSON");
    (exit_code, report)
}

#[test]
fn clean_project_passes() {
    let (code, report) = run_check_on_fixture("clean");
    assert_eq!(code, 0);
    assert_eq!(report["schema"], "layerguard.report.v1");
    assert_eq!(report["verdict"], "pass");
    assert_eq!(report["diagnostics"].as_array().unwrap().len(), 0);
    assert_eq!(report["data"]["files_scanned"], 2);
    assert_eq!(report["data"]["imports_scanned"], 1);
}

#[test]
fn boundary_violation_fails_with_location() {
    let (code, report) = run_check_on_fixture("violation");
    assert_eq!(code, 2);
    assert_eq!(report["verdict"], "fail");

    let diagnostics = report["diagnostics"].as_array().unwrap();
    assert_eq!(diagnostics.len(), 1);
    let diag = &diagnostics[0];
    assert_eq!(diag["check_id"], "imports.boundary");
    assert_eq!(diag["code"], "not_in_allow_set");
    assert_eq!(diag["location"]["path"], "src/ui/app.ts");
    assert_eq!(diag["location"]["line"], 1);
    assert_eq!(diag["specifier"], "../db/query");
    assert_eq!(
        diag["message"],
        "Importing from this path is not allowed: ../db/query"
    );
}

#[test]
fn ignored_spec_files_are_exempt() {
    let (code, report) = run_check_on_fixture("ignored_specs");
    assert_eq!(code, 0);
    assert_eq!(report["verdict"], "pass");
}

#[test]
fn external_packages_pass_under_default_disallow() {
    let (code, report) = run_check_on_fixture("external_packages");
    assert_eq!(code, 0);
    assert_eq!(report["data"]["imports_scanned"], 1);
}

#[test]
fn aliased_violation_is_detected() {
    let (code, report) = run_check_on_fixture("aliases");
    assert_eq!(code, 2);
    let diagnostics = report["diagnostics"].as_array().unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0]["code"], "explicit_disallow");
    assert_eq!(diagnostics[0]["specifier"], "@db/query");
}

#[test]
fn uncovered_target_aborts_with_config_error() {
    layerguard_cmd()
        .arg("--root")
        .arg(fixtures_dir().join("uncovered_layer"))
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("matches no declared layer pattern"));
}

#[test]
fn missing_policy_aborts_with_config_error() {
    layerguard_cmd()
        .arg("--root")
        .arg(fixtures_dir().join("missing_policy"))
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("checkImport"));
}

#[test]
fn text_output_summarizes_violations() {
    layerguard_cmd()
        .arg("--root")
        .arg(fixtures_dir().join("violation"))
        .arg("check")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("src/ui/app.ts:1:"))
        .stdout(predicate::str::contains("1 boundary violation ("));
}

#[test]
fn json_format_prints_the_report() {
    layerguard_cmd()
        .arg("--root")
        .arg(fixtures_dir().join("clean"))
        .arg("check")
        .arg("--format")
        .arg("json")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"schema\": \"layerguard.report.v1\""));
}

#[test]
fn annotations_render_from_saved_report() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("report.json");

    layerguard_cmd()
        .arg("--root")
        .arg(fixtures_dir().join("violation"))
        .arg("check")
        .arg("--report-out")
        .arg(&report_path)
        .assert()
        .code(2);

    layerguard_cmd()
        .arg("annotations")
        .arg("--report")
        .arg(&report_path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "::error file=src/ui/app.ts,line=1,",
        ))
        .stdout(predicate::str::contains("[imports.boundary:not_in_allow_set]"));
}

#[test]
fn unknown_format_is_rejected() {
    layerguard_cmd()
        .arg("--root")
        .arg(fixtures_dir().join("clean"))
        .arg("check")
        .arg("--format")
        .arg("yaml")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown format"));
}
