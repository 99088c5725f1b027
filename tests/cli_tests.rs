//! Integration tests for the tulsigen binary.
//!
//! These exercise the process boundary: exit codes, the stdout help/warning
//! channel, and the stderr log channel.

#![allow(deprecated)] // cargo_bin is deprecated but works fine for standard builds

use assert_cmd::Command;
use predicates::prelude::*;

fn tulsigen() -> Command {
    Command::cargo_bin("tulsigen").unwrap()
}

// ============================================================================
// Help
// ============================================================================

#[test]
fn test_help_exits_with_code_1_and_prints_usage() {
    tulsigen()
        .args(["--", "--help"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--genconfig"))
        .stdout(predicate::str::contains("--create-tulsiproj"))
        .stdout(predicate::str::contains("--additionalSourceFilters"))
        .stdout(predicate::str::contains(".tulsiproj[:ConfigName]"));
}

#[test]
fn test_help_short_flag() {
    tulsigen()
        .args(["--", "-h"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

// ============================================================================
// Sentinel handling
// ============================================================================

#[test]
fn test_no_arguments_launches_with_defaults() {
    tulsigen()
        .assert()
        .success()
        .stderr(predicate::str::contains("default options"));
}

#[test]
fn test_missing_sentinel_ignores_all_tokens() {
    // Without the leading "--" even well-formed options are ignored.
    tulsigen()
        .args(["-c", "MyProj.tulsiproj", "--quiet"])
        .assert()
        .success()
        .stderr(predicate::str::contains("default options"));
}

#[test]
fn test_version_is_logged_in_commandline_mode() {
    tulsigen()
        .args(["--", "-c", "MyProj.tulsiproj"])
        .assert()
        .success()
        .stderr(predicate::str::contains("version"))
        .stderr(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Fatal usage errors
// ============================================================================

#[test]
fn test_missing_value_exits_with_code_1() {
    tulsigen()
        .args(["--", "--bazel"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "missing required value for option --bazel",
        ));
}

#[test]
fn test_missing_value_for_short_flag_names_the_flag_as_typed() {
    tulsigen()
        .args(["--", "-c", "MyProj.tulsiproj", "-t"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "missing required value for option -t",
        ));
}

#[test]
fn test_both_mode_flags_exit_with_code_1() {
    tulsigen()
        .args(["--", "-c", "MyProj.tulsiproj", "--create-tulsiproj", "Foo"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--genconfig"))
        .stderr(predicate::str::contains("--create-tulsiproj"));
}

#[test]
fn test_no_mode_flag_exits_with_code_1() {
    tulsigen()
        .args(["--", "--no-workspace-check"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("exactly one of"));
}

// ============================================================================
// Non-fatal advisories
// ============================================================================

#[test]
fn test_unknown_flag_warns_on_stdout_but_run_succeeds() {
    tulsigen()
        .args(["--", "--bogus-flag", "-c", "X.tulsiproj"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--bogus-flag"))
        .stderr(predicate::str::contains("X.tulsiproj"));
}

// ============================================================================
// Successful invocations
// ============================================================================

#[test]
fn test_generator_mode_succeeds() {
    tulsigen()
        .args(["--", "--genconfig", "MyProj.tulsiproj:Config"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Generating Xcode project from config MyProj.tulsiproj:Config",
        ));
}

#[test]
fn test_creator_mode_with_all_options_succeeds() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path().to_str().unwrap();

    tulsigen()
        .args([
            "--",
            "--create-tulsiproj",
            "Foo",
            "-o",
            dir,
            "-w",
            dir,
            "--bazel",
            "/usr/local/bin/bazel",
            "--no-open-xcode",
            "--no-workspace-check",
            "-t",
            "//foo:bar",
            "-t",
            "//baz:qux",
            "--additionalSourceFilters",
            "//foo/bar baz//qux",
            "--startup-options",
            "--host_jvm_args=-Xmx4g",
            "--build-options",
            "--define foo=bar",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Creating project bundle Foo"));
}

#[test]
fn test_quiet_suppresses_informational_logging() {
    tulsigen()
        .args(["--", "-q", "-c", "MyProj.tulsiproj"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Generating").not())
        .stderr(predicate::str::contains("version").not());
}
