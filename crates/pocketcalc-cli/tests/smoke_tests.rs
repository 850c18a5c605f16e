//! Smoke tests for the pocketcalc binary
//!
//! Everything here runs headless: the interactive session needs a real
//! terminal, so only its argument handling is exercised.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin until assert_cmd is updated
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command for the pocketcalc binary with a clean environment
fn pocketcalc() -> Command {
    let mut cmd = Command::cargo_bin("pocketcalc").expect("pocketcalc binary should exist");
    cmd.env_remove("POCKETCALC_LOCALE")
        .env_remove("POCKETCALC_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    pocketcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    pocketcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("press"))
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("--locale"));
}

#[test]
fn test_press_help() {
    pocketcalc()
        .args(["press", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Replay key presses"));
}

// ============================================================================
// Press
// ============================================================================

#[test]
fn test_press_chained_addition() {
    pocketcalc()
        .args(["press", "3+4+5="])
        .assert()
        .success()
        .stdout("12\n");
}

#[test]
fn test_press_separate_keys() {
    pocketcalc()
        .args(["press", "9", "-", "4", "Enter"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_press_eager_evaluation() {
    pocketcalc()
        .args(["press", "2+3*4="])
        .assert()
        .success()
        .stdout("20\n");
}

#[test]
fn test_press_division_by_zero() {
    pocketcalc()
        .args(["press", "8/0="])
        .assert()
        .success()
        .stdout("Error\n");
}

#[test]
fn test_press_percent_and_toggle() {
    pocketcalc()
        .args(["press", "50%", "F9", "--raw"])
        .assert()
        .success()
        .stdout("-0.5\n");
}

#[test]
fn test_press_grouping_by_locale() {
    pocketcalc()
        .args(["press", "1234567"])
        .assert()
        .success()
        .stdout("1,234,567\n");

    pocketcalc()
        .args(["--locale", "de-de", "press", "1234.5"])
        .assert()
        .success()
        .stdout("1.234,5\n");
}

#[test]
fn test_press_locale_from_env() {
    pocketcalc()
        .env("POCKETCALC_LOCALE", "ar-eg")
        .args(["press", "12"])
        .assert()
        .success()
        .stdout("١٢\n");
}

#[test]
fn test_press_raw() {
    pocketcalc()
        .args(["press", "1234.50", "--raw"])
        .assert()
        .success()
        .stdout("1234.50\n");
}

#[test]
fn test_press_json() {
    let output = pocketcalc()
        .args(["press", "12+", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let state: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(state["display"], "12");
    assert_eq!(state["first_operand"], 12.0);
    assert_eq!(state["operator"], "add");
    assert_eq!(state["awaiting_second_operand"], true);
}

#[test]
fn test_press_invalid_key() {
    pocketcalc()
        .args(["press", "1q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid key"));
}

#[test]
fn test_press_requires_keys() {
    pocketcalc().arg("press").assert().failure();
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_config_defaults() {
    pocketcalc()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"locale\": \"en-us\""))
        .stdout(predicate::str::contains("\"show_help\": true"));
}

#[test]
fn test_config_file_and_override() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pocketcalc.yaml");
    fs::write(&path, "locale: de-de\nshow_help: false\n").unwrap();

    pocketcalc()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"locale\": \"de-de\""))
        .stdout(predicate::str::contains("\"show_help\": false"));

    pocketcalc()
        .arg("--config")
        .arg(&path)
        .args(["--locale", "raw", "press", "1234.5"])
        .assert()
        .success()
        .stdout("1234.5\n");
}

#[test]
fn test_config_file_invalid() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.yaml");
    fs::write(&path, "locale: [\n").unwrap();

    pocketcalc()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_config_file_missing() {
    pocketcalc()
        .args(["--config", "/nonexistent/pocketcalc.yaml", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_log_file_receives_debug_events() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("calc.log");

    pocketcalc()
        .arg("-vv")
        .arg("--log-file")
        .arg(&log)
        .args(["press", "7"])
        .assert()
        .success()
        .stdout("7\n")
        .stderr("");

    let text = fs::read_to_string(&log).unwrap();
    assert!(text.contains("replayed keys"));
}
