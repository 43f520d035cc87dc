//! Integration tests for hwnd-pilot CLI output behavior
//!
//! The default behavior is quiet (no logs). Use -v/--verbose to enable logs.
//! Each test runs with HOME and the working directory pointed at a fresh
//! temp dir so no real config file is picked up.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_pilot(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hwnd-pilot"))
        .args(args)
        .env("HOME", home)
        .env("USERPROFILE", home)
        .env_remove("RUST_LOG")
        .current_dir(home)
        .output()
        .unwrap_or_else(|e| panic!("Failed to execute 'hwnd-pilot {}': {}", args.join(" "), e))
}

/// Execute 'hwnd-pilot config' and verify it succeeds
fn run_pilot_config(home: &Path, args: &[&str]) -> Output {
    let mut full = vec!["config"];
    full.extend_from_slice(args);
    let output = run_pilot(home, &full);

    assert!(
        output.status.success(),
        "hwnd-pilot config failed with exit code {:?}. stderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );

    output
}

fn write_project_config(dir: &Path, content: &str) {
    let config_dir = dir.join(".hwnd-pilot");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), content).unwrap();
}

// =============================================================================
// Default Mode (Quiet) Behavioral Tests
// =============================================================================

/// Verify that default mode (no flags) suppresses INFO-level logs
#[test]
fn test_default_mode_suppresses_info_logs() {
    let home = tempfile::tempdir().unwrap();
    let output = run_pilot_config(home.path(), &[]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains(r#""level":"INFO""#),
        "Default mode should suppress INFO logs, but stderr contains: {}",
        stderr
    );
    assert!(
        !stderr.contains(r#""level":"DEBUG""#),
        "Default mode should suppress DEBUG logs, but stderr contains: {}",
        stderr
    );
}

/// Verify that stdout contains only user-facing output (no JSON logs)
#[test]
fn test_stdout_is_clean() {
    let home = tempfile::tempdir().unwrap();
    let output = run_pilot_config(home.path(), &["-v"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        !stdout.contains(r#""level""#),
        "stdout should not contain log events: {}",
        stdout
    );
    assert!(stdout.contains("[timing]"));
}

// =============================================================================
// Verbose Mode Behavioral Tests
// =============================================================================

/// Verify that -v emits INFO-level JSON logs on stderr
#[test]
fn test_verbose_flag_emits_info_logs() {
    let home = tempfile::tempdir().unwrap();
    let output = run_pilot_config(home.path(), &["-v"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(r#""level":"INFO""#),
        "Verbose mode should emit INFO logs, but stderr is: {}",
        stderr
    );
    assert!(stderr.contains("core.app.startup_completed"));
}

/// Verify that --verbose behaves like -v
#[test]
fn test_verbose_long_flag() {
    let home = tempfile::tempdir().unwrap();
    let output = run_pilot_config(home.path(), &["--verbose"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(r#""level":"INFO""#));
}

// =============================================================================
// Config Command Tests
// =============================================================================

#[test]
fn test_config_defaults_json() {
    let home = tempfile::tempdir().unwrap();
    let output = run_pilot_config(home.path(), &["--json"]);

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("config --json should print JSON");
    assert_eq!(value["drag_pause_ms"], 1000);
    assert_eq!(value["click_pause_ms"], 100);
    assert_eq!(value["encoding"], "GBK");
}

#[test]
fn test_project_config_overrides_defaults() {
    let home = tempfile::tempdir().unwrap();
    write_project_config(
        home.path(),
        "[timing]\nclick_pause_ms = 20\n\n[clipboard]\nencoding = \"utf-8\"\n",
    );
    let output = run_pilot_config(home.path(), &["--json"]);

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["drag_pause_ms"], 1000);
    assert_eq!(value["click_pause_ms"], 20);
    assert_eq!(value["encoding"], "UTF-8");
}

#[test]
fn test_invalid_config_encoding_fails() {
    let home = tempfile::tempdir().unwrap();
    write_project_config(home.path(), "[clipboard]\nencoding = \"klingon\"\n");
    let output = run_pilot(home.path(), &["config"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("klingon"),
        "error should name the bad label: {}",
        stderr
    );
}

#[test]
fn test_utf16_config_encoding_fails() {
    let home = tempfile::tempdir().unwrap();
    write_project_config(home.path(), "[clipboard]\nencoding = \"utf-16le\"\n");
    let output = run_pilot(home.path(), &["config"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("can only be read"),
        "error should explain the encoding is read-only: {}",
        stderr
    );
}

// =============================================================================
// Window Command Tests
// =============================================================================

#[test]
fn test_window_command_requires_target() {
    let home = tempfile::tempdir().unwrap();
    let output = run_pilot(home.path(), &["rect"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--class or --title"), "stderr: {}", stderr);
}

#[test]
fn test_bad_rect_rejected_before_lookup() {
    let home = tempfile::tempdir().unwrap();
    let output = run_pilot(home.path(), &["--title", "Nothing", "move", "1,2,3"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("exactly 4 values"), "stderr: {}", stderr);
}

#[test]
fn test_unknown_key_rejected_before_lookup() {
    let home = tempfile::tempdir().unwrap();
    let output = run_pilot(home.path(), &["--title", "Nothing", "key", "notakey"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("notakey"), "stderr: {}", stderr);
}

#[cfg(not(windows))]
#[test]
fn test_window_command_unsupported_off_windows() {
    let home = tempfile::tempdir().unwrap();
    let output = run_pilot(home.path(), &["--title", "Untitled - Notepad", "rect"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("not supported"),
        "expected an unsupported-platform error, got: {}",
        stderr
    );
}

#[cfg(windows)]
#[test]
fn test_missing_window_reports_invalid_handle() {
    let home = tempfile::tempdir().unwrap();
    let output = run_pilot(
        home.path(),
        &["--class", "hwnd-pilot-no-such-class", "rect"],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid window handle"), "stderr: {}", stderr);
}
