//! Integration tests running the treefs binary over piped stdin

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn run_binary(temp_dir: &TempDir, args: &[&str], script: &str) -> std::process::Output {
    run_binary_with_env(temp_dir, &[], args, script)
}

fn run_binary_with_env(
    temp_dir: &TempDir,
    envs: &[(&str, &str)],
    args: &[&str],
    script: &str,
) -> std::process::Output {
    let home = temp_dir.path().join("home");
    let workspace = temp_dir.path().join("ws");
    fs::create_dir_all(&home).unwrap();
    fs::create_dir_all(&workspace).unwrap();

    let bin = env!("CARGO_BIN_EXE_treefs");
    let mut child = Command::new(bin)
        .env("HOME", home.as_os_str())
        .env("XDG_CONFIG_HOME", home.join(".config").as_os_str())
        .env_remove("TREEFS_ENV")
        .env_remove("TREEFS_NAMESPACE__ORDER")
        .env_remove("TREEFS_LOG")
        .env_remove("TREEFS_LOG_FORMAT")
        .env_remove("TREEFS_LOG_OUTPUT")
        .env_remove("TREEFS_LOG_MODULES")
        .envs(envs.iter().copied())
        .current_dir(&workspace)
        .arg("--workspace")
        .arg(&workspace)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // The child may exit before reading stdin (e.g. config validation failure).
    if let Err(e) = child.stdin.take().unwrap().write_all(script.as_bytes()) {
        assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe, "stdin write failed: {e}");
    }
    child.wait_with_output().unwrap()
}

#[test]
fn test_binary_runs_script_and_saves() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_binary(
        &temp_dir,
        &["--order", "2", "--quiet"],
        "mkdir a\necho b hello\nls\nexit\n",
    );

    assert!(
        output.status.success(),
        "treefs should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Virtual file system started."));
    assert!(stdout.contains("Contents of /:\na/\nb"));

    let report = fs::read_to_string(temp_dir.path().join("ws").join("fs.img")).unwrap();
    assert!(report.contains("├── b (5 bytes)"));
}

#[test]
fn test_binary_rejects_invalid_order() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_binary(&temp_dir, &["--order", "1"], "exit\n");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration validation failed"));
}

#[test]
fn test_verbose_logging_goes_to_stderr() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_binary(
        &temp_dir,
        &["--verbose", "--no-banner", "--no-save-on-exit"],
        "touch x\nexit\n",
    );

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.trim().is_empty(), "verbose mode should emit logs to stderr");
    assert!(!temp_dir.path().join("ws").join("fs.img").exists());
}

#[test]
fn test_log_format_flag_beats_environment() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_binary_with_env(
        &temp_dir,
        &[("TREEFS_LOG_FORMAT", "json")],
        &["--verbose", "--log-format", "text", "--no-banner", "--no-save-on-exit"],
        "exit\n",
    );

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap_or("");
    assert!(!first.is_empty(), "verbose mode should emit logs to stderr");
    assert!(
        !first.trim_start().starts_with('{'),
        "--log-format text should win over TREEFS_LOG_FORMAT; got: {}",
        first
    );
}

#[test]
fn test_log_environment_applies_without_flags() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_binary_with_env(
        &temp_dir,
        &[("TREEFS_LOG_FORMAT", "json"), ("TREEFS_LOG", "info")],
        &["--no-banner", "--no-save-on-exit"],
        "exit\n",
    );

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap_or("");
    let event: serde_json::Value = serde_json::from_str(first).unwrap();
    assert_eq!(event["fields"]["message"], "Treefs starting");
}

#[test]
fn test_invalid_log_environment_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    for (key, value) in [("TREEFS_LOG_FORMAT", "yaml"), ("TREEFS_LOG_OUTPUT", "both")] {
        let output = run_binary_with_env(&temp_dir, &[(key, value)], &[], "exit\n");
        assert!(!output.status.success(), "{}={} should be rejected", key, value);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Configuration validation failed"));
    }
}
