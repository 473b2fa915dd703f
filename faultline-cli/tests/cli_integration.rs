//! Integration tests for the faultline CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

#[test]
fn test_run_success() {
    let mut cmd = Command::cargo_bin("faultline").unwrap();
    cmd.arg("run").arg("-c").arg(fixture_path("success.toml"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("pipeline completed"));
}

#[test]
fn test_run_fetch_failure_is_fatal() {
    let mut cmd = Command::cargo_bin("faultline").unwrap();
    cmd.arg("run").arg("--fail-fetch").arg("value");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "process failed: fetch failed: injected failure",
        ));
}

#[test]
fn test_run_sentinel_scenario() {
    let mut cmd = Command::cargo_bin("faultline").unwrap();
    cmd.arg("run").arg("-c").arg(fixture_path("fetch-not-found.toml"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("fetch failed: not found"))
        .stderr(predicate::str::contains("sentinel: not_found"));
}

#[test]
fn test_run_recover_not_found() {
    let mut cmd = Command::cargo_bin("faultline").unwrap();
    cmd.arg("run")
        .arg("-c")
        .arg(fixture_path("fetch-not-found.toml"))
        .arg("--recover");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("recovered (item not found, using defaults)"));
}

#[test]
fn test_run_recover_still_fatal_for_server_error() {
    let mut cmd = Command::cargo_bin("faultline").unwrap();
    cmd.arg("run")
        .arg("-c")
        .arg(fixture_path("save-unavailable.toml"))
        .arg("--recover");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "persist failed: insert row: HTTP 503: Service Unavailable",
        ))
        .stderr(predicate::str::contains("status: 503 (Service Unavailable)"));
}

#[test]
fn test_run_flag_overrides_config() {
    let mut cmd = Command::cargo_bin("faultline").unwrap();
    cmd.arg("run")
        .arg("-c")
        .arg(fixture_path("success.toml"))
        .arg("--fail-save")
        .arg("http500");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "db save failed: HTTP 500: Internal Server Error",
        ));
}

#[test]
fn test_json_output() {
    let mut cmd = Command::cargo_bin("faultline").unwrap();
    cmd.arg("run")
        .arg("-c")
        .arg(fixture_path("save-unavailable.toml"))
        .arg("-f")
        .arg("json");

    let output = cmd.assert().failure().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(value["fatal"], true);
    assert_eq!(value["failure"]["kind"], "chained");
    assert_eq!(value["failure"]["contexts"][0], "persist failed");
    assert_eq!(value["failure"]["contexts"][1], "insert row");
    assert_eq!(value["failure"]["root"]["kind"], "custom");
    assert_eq!(value["failure"]["custom"]["code"], 503);
}

#[test]
fn test_unknown_sentinel_scenario() {
    let mut cmd = Command::cargo_bin("faultline").unwrap();
    cmd.arg("run").arg("-c").arg(fixture_path("unknown-sentinel.toml"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown sentinel 'evaporated'"));
}

#[test]
fn test_missing_scenario_file() {
    let mut cmd = Command::cargo_bin("faultline").unwrap();
    cmd.arg("run").arg("-c").arg("nonexistent.toml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Scenario file not found"));
}

#[test]
fn test_scenario_from_temp_dir() {
    let temp_dir = TempDir::new().unwrap();
    let scenario = temp_dir.path().join("scenario.toml");
    fs::write(
        &scenario,
        "[pipeline]\nfetch_context = \"lookup failed\"\n\n[fetch.fail]\nkind = \"value\"\nmessage = \"disk full\"\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("faultline").unwrap();
    cmd.arg("run").arg("-c").arg(&scenario);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("process failed: lookup failed: disk full"));
}

#[test]
fn test_demo_is_fatal_at_last_section() {
    let mut cmd = Command::cargo_bin("faultline").unwrap();
    cmd.arg("demo");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("SECTION 1: Basic Error Handling"))
        .stdout(predicate::str::contains("User not found (sentinel error)"))
        .stdout(predicate::str::contains(
            "Custom Error - Status code: 404, Message: Not Found",
        ))
        .stdout(predicate::str::contains("SECTION 5: Anti-Patterns"))
        .stderr(predicate::str::contains(
            "process failed: fetch failed: failed to fetch metadata",
        ));
}

#[test]
fn test_list_sentinels() {
    let mut cmd = Command::cargo_bin("faultline").unwrap();
    cmd.arg("list").arg("sentinels");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("not_found"))
        .stdout(predicate::str::contains("permission_denied"));
}

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("faultline").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("demo"));
}

#[test]
fn test_invalid_failure_kind() {
    let mut cmd = Command::cargo_bin("faultline").unwrap();
    cmd.arg("run").arg("--fail-fetch").arg("meteor");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("faultline").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
