use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn goplanify() -> Command {
    let mut cmd = Command::cargo_bin("goplanify").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_namespaces() {
    goplanify()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("trips"))
        .stdout(predicate::str::contains("location"))
        .stdout(predicate::str::contains("prefs"))
        .stdout(predicate::str::contains("--screen-width"));
}

#[test]
fn test_unknown_format_is_rejected() {
    goplanify()
        .args(["trips", "list", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'yaml'"));
}

#[test]
fn test_debug_logs_go_to_stderr() {
    let dir = tempfile_dir();
    goplanify()
        .args(["trips", "list", "--format", "json", "--log-level", "debug"])
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stderr(predicate::str::contains("trips fetched"));
}

fn tempfile_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().expect("Failed to create temp dir")
}
