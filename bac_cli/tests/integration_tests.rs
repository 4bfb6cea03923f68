//! Integration tests for the bacsim binary.
//!
//! These tests verify end-to-end behavior including:
//! - Scenario loading and profile merging
//! - Status and timeline output
//! - Config overrides and error reporting

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Five shots from 19:00, female 120 lb
const HEAVY_SCENARIO: &str = r#"{
    "drinks": [
        {"type": "spirits", "quantity": 5, "alcoholPercent": null, "time": "2024-06-01T19:00:00Z"}
    ],
    "foods": [],
    "profileUpdates": {"sex": "female", "weight": 120}
}"#;

const EVENING: &str = "2024-06-01T21:00:00Z";

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("bacsim"))
}

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write test file");
    path
}

/// Writes a default config and a scenario, returns (config, scenario)
fn setup_scenario(dir: &Path, scenario: &str) -> (PathBuf, PathBuf) {
    let config = write_file(dir, "config.toml", "[profile]\nsex = \"male\"\nweight_lbs = 180.0\n");
    let scenario = write_file(dir, "scenario.json", scenario);
    (config, scenario)
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Blood alcohol content simulator"));
}

#[test]
fn test_levels_table() {
    let temp_dir = setup_test_dir();
    let (config, _) = setup_scenario(temp_dir.path(), HEAVY_SCENARIO);

    cli()
        .arg("levels")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Extreme Intoxication"))
        .stdout(predicate::str::contains("LIFE-THREATENING"))
        .stdout(predicate::str::contains("Sober"));
}

#[test]
fn test_status_json() {
    let temp_dir = setup_test_dir();
    let (config, scenario) = setup_scenario(temp_dir.path(), HEAVY_SCENARIO);

    let output = cli()
        .arg("status")
        .arg("--config")
        .arg(&config)
        .arg("--scenario")
        .arg(&scenario)
        .arg("--at")
        .arg(EVENING)
        .arg("--json")
        .output()
        .expect("Failed to run bacsim");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("status --json should print JSON");

    let bac = report["bac"].as_f64().unwrap();
    assert!(bac >= 0.08 && bac < 0.15, "unexpected bac {}", bac);
    assert_eq!(report["impairmentLevel"]["legalStatus"], "ILLEGAL - DUI");
    assert_eq!(report["impairmentLevel"]["fitToDrive"], "NO");
    assert_eq!(report["drinks"], 5);
    assert!(!report["legalAt"].is_null());
    assert!(report["minutesToSober"].as_i64().unwrap() > 0);
    assert!(report["peak"]["bac"].as_f64().unwrap() >= bac);
}

#[test]
fn test_status_text() {
    let temp_dir = setup_test_dir();
    let (config, scenario) = setup_scenario(temp_dir.path(), HEAVY_SCENARIO);

    cli()
        .arg("status")
        .arg("--config")
        .arg(&config)
        .arg("--scenario")
        .arg(&scenario)
        .arg("--at")
        .arg(EVENING)
        .assert()
        .success()
        .stdout(predicate::str::contains("Moderate Impairment"))
        .stdout(predicate::str::contains("Fit to drive: NO"))
        .stdout(predicate::str::contains("Shot/Spirit"));
}

#[test]
fn test_status_empty_scenario_is_sober() {
    let temp_dir = setup_test_dir();
    let (config, scenario) = setup_scenario(temp_dir.path(), "{}");

    let output = cli()
        .arg("status")
        .arg("--config")
        .arg(&config)
        .arg("--scenario")
        .arg(&scenario)
        .arg("--at")
        .arg(EVENING)
        .arg("--json")
        .output()
        .expect("Failed to run bacsim");
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["bac"].as_f64(), Some(0.0));
    assert_eq!(report["minutesToSober"], 0);
    assert!(report["legalAt"].is_null());
    assert!(report["minutesToLegalLimit"].is_null());
    assert_eq!(report["impairmentLevel"]["label"], "Sober");
}

#[test]
fn test_timeline_csv_from_now() {
    let temp_dir = setup_test_dir();
    let (config, scenario) = setup_scenario(temp_dir.path(), HEAVY_SCENARIO);

    let output = cli()
        .arg("timeline")
        .arg("--config")
        .arg(&config)
        .arg("--scenario")
        .arg(&scenario)
        .arg("--at")
        .arg(EVENING)
        .arg("--hours")
        .arg("1")
        .arg("--csv")
        .output()
        .expect("Failed to run bacsim");
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 14);
    assert_eq!(lines[0], "time,bac,percent,level");
    assert!(lines[1].starts_with("2024-06-01T21:00:00+00:00,"));
    assert!(lines[13].starts_with("2024-06-01T22:00:00+00:00,"));
}

#[test]
fn test_timeline_csv_from_start() {
    let temp_dir = setup_test_dir();
    let (config, scenario) = setup_scenario(temp_dir.path(), HEAVY_SCENARIO);

    cli()
        .arg("timeline")
        .arg("--config")
        .arg(&config)
        .arg("--scenario")
        .arg(&scenario)
        .arg("--at")
        .arg(EVENING)
        .arg("--hours")
        .arg("2")
        .arg("--from-start")
        .arg("--csv")
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-06-01T19:00:00+00:00,0.0039"))
        .stdout(predicate::str::contains("2024-06-01T21:00:00+00:00,"));
}

#[test]
fn test_timeline_uses_config_hours() {
    let temp_dir = setup_test_dir();
    let config = write_file(temp_dir.path(), "config.toml", "[timeline]\nhours = 3\n");
    let scenario = write_file(temp_dir.path(), "scenario.json", HEAVY_SCENARIO);

    let output = cli()
        .arg("timeline")
        .arg("--config")
        .arg(&config)
        .arg("--scenario")
        .arg(&scenario)
        .arg("--at")
        .arg(EVENING)
        .output()
        .expect("Failed to run bacsim");
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    assert_eq!(text.lines().count(), 37);
}

#[test]
fn test_missing_scenario_fails() {
    let temp_dir = setup_test_dir();
    let (config, _) = setup_scenario(temp_dir.path(), HEAVY_SCENARIO);

    cli()
        .arg("status")
        .arg("--config")
        .arg(&config)
        .arg("--scenario")
        .arg(temp_dir.path().join("nope.json"))
        .assert()
        .failure();
}

#[test]
fn test_unknown_drink_type_fails() {
    let temp_dir = setup_test_dir();
    let (config, scenario) = setup_scenario(
        temp_dir.path(),
        r#"{"drinks": [{"type": "mead", "time": "2024-06-01T19:00:00Z"}]}"#,
    );

    cli()
        .arg("status")
        .arg("--config")
        .arg(&config)
        .arg("--scenario")
        .arg(&scenario)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown variant"));
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = setup_test_dir();
    let config = write_file(temp_dir.path(), "config.toml", "[profile]\nweight_lbs = -5.0\n");
    let scenario = write_file(temp_dir.path(), "scenario.json", HEAVY_SCENARIO);

    cli()
        .arg("status")
        .arg("--config")
        .arg(&config)
        .arg("--scenario")
        .arg(&scenario)
        .assert()
        .failure()
        .stderr(predicate::str::contains("weight_lbs must be positive"));
}

#[test]
fn test_scenario_zero_weight_rejected() {
    let temp_dir = setup_test_dir();
    let (config, scenario) = setup_scenario(
        temp_dir.path(),
        r#"{
            "drinks": [{"type": "beer_regular", "time": "2024-06-01T19:00:00Z"}],
            "profileUpdates": {"weight": 0}
        }"#,
    );

    for args in [
        vec!["timeline", "--hours", "1"],
        vec!["status", "--json"],
    ] {
        cli()
            .args(&args)
            .arg("--config")
            .arg(&config)
            .arg("--scenario")
            .arg(&scenario)
            .arg("--at")
            .arg("2024-06-01T19:30:00Z")
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("weight_lbs must be positive"));
    }
}
