//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against a per-test data
//! directory (HABITRACK_DATA_DIR) and verify outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command against an isolated data directory.
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "habitrack-cli", "--"])
        .args(args)
        .env("HABITRACK_DATA_DIR", data_dir)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_catalog_lists_categories() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["catalog"]);
    assert_eq!(code, 0, "catalog failed");
    assert!(stdout.contains("quitting:"));
    assert!(stdout.contains("lifestyle:"));
    assert!(stdout.contains("quit-caffeine"));
}

#[test]
fn test_habit_add_and_list() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["habit", "add", "quit-caffeine"]);
    assert_eq!(code, 0, "habit add failed");
    assert!(stdout.contains("Tracking 'Quit Caffeine'"));

    let (stdout, _, code) = run_cli(dir.path(), &["habit", "list", "--json"]);
    assert_eq!(code, 0, "habit list failed");
    let rows: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["name"], "Quit Caffeine");
}

#[test]
fn test_duplicate_add_leaves_collection_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(dir.path(), &["habit", "add", "fasting"]);
    let (stdout, _, code) = run_cli(dir.path(), &["habit", "add", "fasting"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Already tracking"));

    let (stdout, _, _) = run_cli(dir.path(), &["habit", "list", "--json"]);
    let rows: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 1);
}

#[test]
fn test_log_toggles_back_to_cleared() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(dir.path(), &["habit", "add", "fasting"]);

    let args = ["log", "Fasting", "success", "--date", "2026-03-14"];
    let (stdout, _, code) = run_cli(dir.path(), &args);
    assert_eq!(code, 0, "log failed");
    assert!(stdout.contains("2026-03-14: Success"));

    let (stdout, _, _) = run_cli(dir.path(), &args);
    assert!(stdout.contains("2026-03-14: cleared"));
}

#[test]
fn test_streak_reports_json() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(dir.path(), &["habit", "add", "fasting"]);
    run_cli(dir.path(), &["log", "Fasting", "success", "--date", "2026-03-13"]);
    run_cli(dir.path(), &["log", "Fasting", "partial", "--date", "2026-03-14"]);

    let (stdout, _, code) = run_cli(
        dir.path(),
        &["streak", "Fasting", "--date", "2026-03-14"],
    );
    assert_eq!(code, 0, "streak failed");
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["streak"], 2);
}

#[test]
fn test_calendar_renders_twelve_months() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(dir.path(), &["habit", "add", "fasting"]);

    let (stdout, _, code) = run_cli(
        dir.path(),
        &["calendar", "Fasting", "--date", "2026-03-14"],
    );
    assert_eq!(code, 0, "calendar failed");
    assert!(stdout.contains("Apr 2025"));
    assert!(stdout.contains("Mar 2026"));
    assert!(stdout.contains("Legend"));

    let (stdout, _, _) = run_cli(
        dir.path(),
        &["calendar", "Fasting", "--date", "2026-03-14", "--json"],
    );
    let months: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(months.as_array().unwrap().len(), 12);
}

#[test]
fn test_remove_requires_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(dir.path(), &["habit", "add", "fasting"]);

    let (_, stderr, code) = run_cli(dir.path(), &["habit", "remove", "Fasting"]);
    assert_ne!(code, 0, "remove without --yes must refuse");
    assert!(stderr.contains("--yes"));

    let (stdout, _, code) = run_cli(dir.path(), &["habit", "remove", "Fasting", "--yes"]);
    assert_eq!(code, 0, "confirmed remove failed");
    assert!(stdout.contains("Removed"));

    let (stdout, _, _) = run_cli(dir.path(), &["habit", "list", "--json"]);
    let rows: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(rows.as_array().unwrap().is_empty());
}

#[test]
fn test_unknown_habit_selector_errors() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["streak", "Nonexistent"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("no tracked habit"));
}
