//! End-to-end CLI tests: loading, validation, report rendering
#![allow(deprecated)] // suppress assert_cmd::Command::cargo_bin deprecation in tests

use assert_cmd::Command;
use predicates::prelude::*;

mod utils;
use utils::{fixture_path, write_dataset};

#[test]
fn test_default_report_renders_all_sections() {
    let mut cmd = Command::cargo_bin("paygap").unwrap();
    cmd.arg(fixture_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Executive Summary ==="))
        .stdout(predicate::str::contains("=== Compensation Ranking ==="))
        .stdout(predicate::str::contains("=== Pay by Industry ==="))
        .stdout(predicate::str::contains("=== The Buffett Model ==="));
}

#[test]
fn test_invalid_fixture_rows_are_dropped() {
    // The fixture has 14 data rows; one lacks a salary and must be skipped.
    let mut cmd = Command::cargo_bin("paygap").unwrap();
    cmd.arg("-r")
        .arg("summary")
        .arg(fixture_path())
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"CEOs analyzed:\s+13\n").unwrap())
        .stdout(predicate::str::contains("Pat Invalid").not());
}

#[test]
fn test_ranking_is_sorted_by_compensation() {
    let mut cmd = Command::cargo_bin("paygap").unwrap();
    let output = cmd
        .arg("-r")
        .arg("summary")
        .arg(fixture_path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let pichai = stdout.find("Sundar Pichai").unwrap();
    let cook = stdout.find("Tim Cook").unwrap();
    assert!(pichai < cook, "highest-paid CEO should be ranked first");
}

#[test]
fn test_top_limits_ranking_rows() {
    let mut cmd = Command::cargo_bin("paygap").unwrap();
    cmd.arg("-r")
        .arg("summary")
        .arg("--top")
        .arg("1")
        .arg(fixture_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Sundar Pichai"))
        .stdout(predicate::str::contains("Tim Cook").not());
}

#[test]
fn test_top_zero_is_rejected() {
    let mut cmd = Command::cargo_bin("paygap").unwrap();
    cmd.arg("--top")
        .arg("0")
        .arg(fixture_path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for --top"));
}

#[test]
fn test_missing_file_fails_with_path() {
    let mut cmd = Command::cargo_bin("paygap").unwrap();
    cmd.arg("/nonexistent/ceo_pay.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/ceo_pay.csv"));
}

#[test]
fn test_missing_column_is_fatal() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("bad.csv");
    std::fs::write(&path, "CEO Name,Company,Salary\nJane,Acme,$5\n").unwrap();

    let mut cmd = Command::cargo_bin("paygap").unwrap();
    cmd.arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required column"));
}

#[test]
fn test_dataset_with_no_usable_rows_is_fatal() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_dataset(&dir, &["Jane,Acme,Tech,not-a-number,$50000,,,"]);

    let mut cmd = Command::cargo_bin("paygap").unwrap();
    cmd.arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no usable rows"));
}

#[test]
fn test_output_flag_writes_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().join("report.txt");

    let mut cmd = Command::cargo_bin("paygap").unwrap();
    cmd.arg("-o")
        .arg(&out)
        .arg(fixture_path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("=== Executive Summary ==="));
}

#[test]
fn test_config_file_overrides_buffett_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = dir.path().join("paygap.toml");
    std::fs::write(&config, "[buffett]\nreturn_rate = 0.0\nyears = 3\n").unwrap();

    let mut cmd = Command::cargo_bin("paygap").unwrap();
    cmd.arg("-r")
        .arg("performance")
        .arg("--config")
        .arg(&config)
        .arg(fixture_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0.0%"))
        .stdout(predicate::str::is_match(r"Horizon:\s+3 years").unwrap());
}

#[test]
fn test_invalid_config_is_fatal() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = dir.path().join("paygap.toml");
    std::fs::write(&config, "[buffett]\ninterest = 0.07\n").unwrap();

    let mut cmd = Command::cargo_bin("paygap").unwrap();
    cmd.arg("--config")
        .arg(&config)
        .arg(fixture_path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("paygap.toml"));
}

#[test]
fn test_buffett_flags_override_config() {
    let mut cmd = Command::cargo_bin("paygap").unwrap();
    cmd.arg("-r")
        .arg("performance")
        .arg("--return-rate")
        .arg("0.0")
        .arg("--years")
        .arg("5")
        .arg("--baseline")
        .arg("1300000")
        .arg(fixture_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Baseline pay:"))
        .stdout(predicate::str::contains("$1,300,000"))
        .stdout(predicate::str::is_match(r"Horizon:\s+5 years").unwrap());
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("paygap").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("paygap"));
}
