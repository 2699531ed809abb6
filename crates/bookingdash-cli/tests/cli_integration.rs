//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

fn cli_cmd() -> Command {
    Command::cargo_bin("bookingdash").expect("Failed to find bookingdash binary")
}

/// Write `json` to a model file inside `dir`
fn write_model(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("model.json");
    std::fs::write(&path, json).unwrap();
    path
}

/// Export the sample model as JSON text
fn exported_sample() -> String {
    let output = cli_cmd().arg("export").output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_show_sample() {
    cli_cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome!"))
        .stdout(predicate::str::contains("[dashboard] Total Bookings: 28"))
        .stdout(predicate::str::contains("[cog] Visa: 3"))
        .stdout(predicate::str::contains("Daily Bookings (line):"))
        .stdout(predicate::str::contains("May 9: 9"))
        .stdout(predicate::str::contains("Booking Types Distribution (bar):"))
        .stdout(predicate::str::contains("TravelPackage: 5"));
}

#[test]
fn test_show_keeps_stat_order() {
    let output = cli_cmd().arg("show").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let titles: Vec<&str> = stdout
        .lines()
        .filter_map(|l| l.trim().strip_prefix('['))
        .filter_map(|l| l.split_once("] "))
        .map(|(_, rest)| rest.split(':').next().unwrap_or(""))
        .collect();
    assert_eq!(titles, ["Total Bookings", "Flight", "Hotel", "Travel", "Visa"]);
}

#[test]
fn test_show_greets_user() {
    cli_cmd()
        .args(["show", "--user", "Ada"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Welcome, Ada!"));
}

#[test]
fn test_show_is_repeatable() {
    let first = cli_cmd().arg("show").output().unwrap();
    let second = cli_cmd().arg("show").output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_show_custom_model_with_separators() {
    let dir = TempDir::new().unwrap();
    let json = exported_sample().replace("\"value\": 28", "\"value\": 12500");
    let path = write_model(&dir, &json);

    cli_cmd()
        .arg("show")
        .arg("--model")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Bookings: 12,500"));
}

// ============================================================================
// Validate Command Tests
// ============================================================================

#[test]
fn test_validate_exported_sample() {
    let dir = TempDir::new().unwrap();
    let path = write_model(&dir, &exported_sample());

    cli_cmd()
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: 5 stats, 7 line labels, 4 bar labels"));
}

#[test]
fn test_validate_rejects_unknown_icon() {
    let dir = TempDir::new().unwrap();
    let json = exported_sample().replace("\"icon\": \"cog\"", "\"icon\": \"plane\"");
    let path = write_model(&dir, &json);

    cli_cmd()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed model in"))
        .stderr(predicate::str::contains("Unknown icon tag: \"plane\""));
}

#[test]
fn test_validate_rejects_length_mismatch() {
    let dir = TempDir::new().unwrap();
    let json = exported_sample().replace("\"Visa\"\n", "\"Visa\",\n      \"Cruise\"\n");
    let path = write_model(&dir, &json);

    cli_cmd()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("has 4 values for 5 labels"));
}

#[test]
fn test_validate_missing_file() {
    let dir = TempDir::new().unwrap();

    cli_cmd()
        .arg("validate")
        .arg(dir.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read model file"))
        .stderr(predicate::str::contains("malformed model").not());
}

#[test]
fn test_validate_rejects_unplottable_range() {
    let dir = TempDir::new().unwrap();
    let json = exported_sample()
        .replace("\"data\": [\n          3.0,", "\"data\": [\n          -1e308,")
        .replace("          9.0\n", "          1e308\n");
    let path = write_model(&dir, &json);

    cli_cmd()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed model in"))
        .stderr(predicate::str::contains("too wide a range to plot"));
}

#[test]
fn test_show_has_no_sum_line() {
    cli_cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sum:").not());
}

// ============================================================================
// Export Command Tests
// ============================================================================

#[test]
fn test_export_contains_sample_series() {
    cli_cmd()
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Daily Bookings\""))
        .stdout(predicate::str::contains("\"TravelPackage\""))
        .stdout(predicate::str::contains("\"icon\": \"shopping\""));
}
