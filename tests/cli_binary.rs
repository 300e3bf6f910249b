//! Subprocess tests for the `roster-db` binary.
//!
//! Runs the real binary via `cargo run` against tempdir-backed files and
//! asserts on exit codes and output. Each test uses its own tempdir, so the
//! tests are independent of each other and of any files in the repository.

use std::path::Path;
use std::process::{Command, Output};

/// Helper: run the binary with the given args against the given data dir.
fn run_cli(dir: &Path, args: &[&str]) -> Output {
    Command::new("cargo")
        .args(["run", "--bin", "roster-db", "--quiet", "--"])
        .args(args)
        .env("ROSTER_DATA", dir.join("Students.csv"))
        .env("ROSTER_LANGUAGES", dir.join("ProgrammingLanguage.csv"))
        .output()
        .expect("failed to execute cargo run")
}

#[test]
fn add_then_list_shows_the_profile() {
    let dir = tempfile::tempdir().expect("failed to create tempdir");

    let add = run_cli(
        dir.path(),
        &[
            "add",
            "Ada Lovelace",
            "--status",
            "Senior",
            "--employed",
            "--language",
            "Python",
            "--role",
            "Backend Developer",
        ],
    );
    assert!(
        add.status.success(),
        "add should succeed, stderr: {}",
        String::from_utf8_lossy(&add.stderr)
    );

    let list = run_cli(dir.path(), &["list"]);
    assert!(list.status.success());
    let stdout = String::from_utf8_lossy(&list.stdout);
    assert!(
        stdout.contains("Ada Lovelace"),
        "list should mention the profile, got: {stdout}"
    );
    assert!(stdout.contains("1 profile(s)"), "got: {stdout}");
}

#[test]
fn duplicate_add_exits_nonzero_with_duplicate_message() {
    let dir = tempfile::tempdir().expect("failed to create tempdir");

    let first = run_cli(dir.path(), &["add", "Ada Lovelace"]);
    assert!(first.status.success());

    // Same name up to normalization.
    let second = run_cli(dir.path(), &["add", "ada   LOVELACE"]);
    assert!(
        !second.status.success(),
        "duplicate add should exit non-zero"
    );
    let stderr = String::from_utf8_lossy(&second.stderr);
    assert!(
        stderr.contains("duplicate key"),
        "stderr should mention the duplicate, got: {stderr}"
    );
}

#[test]
fn remove_missing_profile_exits_nonzero() {
    let dir = tempfile::tempdir().expect("failed to create tempdir");

    let output = run_cli(dir.path(), &["remove", "Grace Hopper"]);
    assert!(!output.status.success(), "remove of a missing name should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("not found"),
        "stderr should mention not found, got: {stderr}"
    );
}

#[test]
fn show_prints_every_field() {
    let dir = tempfile::tempdir().expect("failed to create tempdir");

    let add = run_cli(
        dir.path(),
        &[
            "add",
            "Grace Hopper",
            "--status",
            "Graduate",
            "--database",
            "Postgres",
            "--comment",
            "wrote a compiler",
            "--whitelist",
        ],
    );
    assert!(add.status.success());

    // Lookup is normalized, so a differently-cased query still matches.
    let show = run_cli(dir.path(), &["show", "grace hopper"]);
    assert!(show.status.success());
    let stdout = String::from_utf8_lossy(&show.stdout);
    assert!(stdout.contains("Grace Hopper"), "got: {stdout}");
    assert!(stdout.contains("Graduate"), "got: {stdout}");
    assert!(stdout.contains("Postgres"), "got: {stdout}");
    assert!(stdout.contains("wrote a compiler"), "got: {stdout}");
    assert!(stdout.contains("Whitelisted: Yes"), "got: {stdout}");
}

#[test]
fn languages_command_creates_and_reads_the_catalog() {
    let dir = tempfile::tempdir().expect("failed to create tempdir");

    let output = run_cli(dir.path(), &["languages"]);
    assert!(output.status.success());
    // First run creates the file with just the header, so output is empty.
    assert!(output.stdout.is_empty() || output.stdout == b"\n");

    let catalog_file = dir.path().join("ProgrammingLanguage.csv");
    let contents = std::fs::read_to_string(&catalog_file).expect("catalog file exists");
    assert_eq!(contents, "Name\n");
}

#[test]
fn binary_exits_nonzero_when_data_env_is_empty() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "roster-db", "--quiet", "--", "list"])
        .env("ROSTER_DATA", "")
        .output()
        .expect("failed to execute cargo run");

    assert!(
        !output.status.success(),
        "expected non-zero exit for empty ROSTER_DATA"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("ROSTER_DATA"),
        "stderr should mention ROSTER_DATA, got: {stderr}"
    );
}
