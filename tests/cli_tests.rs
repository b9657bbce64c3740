//! CLI surface tests.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_cli_help() {
    Command::cargo_bin("rightsizer")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--namespace"))
        .stdout(predicate::str::contains("--time-to-parse"))
        .stdout(predicate::str::contains("--output-file"))
        .stdout(predicate::str::contains("--prometheus-url"))
        .stdout(predicate::str::contains("--template"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_cli_version() {
    Command::cargo_bin("rightsizer")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rightsizer"));
}

#[test]
fn test_missing_config_file_exits_nonzero() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("rightsizer")
        .unwrap()
        .current_dir(dir.path())
        .args(["-c", "does-not-exist.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_invalid_window_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("calc_config.yaml"), "payments:\n").unwrap();
    fs::write(dir.path().join("resources.j2"), "{{ data }}").unwrap();

    Command::cargo_bin("rightsizer")
        .unwrap()
        .current_dir(dir.path())
        .args(["-n", "payments", "-t", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid time window"));
}

#[test]
fn test_dry_run_prints_rendered_output() {
    let mut server = mockito::Server::new();
    let _query = server
        .mock("GET", "/api/v1/query")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"status":"success","data":{"resultType":"vector","result":[
                {"metric":{"pod":"api-7f9c8d6b5-x2k9p"},"value":[1722945600.0,"120"]}
            ]}}"#,
        )
        .expect(2)
        .create();

    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("calc_config.yaml"), "payments:\n").unwrap();
    fs::write(
        dir.path().join("resources.j2"),
        "{% for app, r in data %}{{ app }} {{ r.cpu }} {{ r.memory }}{% endfor %}",
    )
    .unwrap();

    let url = server.url();
    Command::cargo_bin("rightsizer")
        .unwrap()
        .current_dir(dir.path())
        .args(["-n", "payments", "--dry-run", "--prometheus-url", url.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("api-7f9c8d6b5 120m 120Mi"))
        .stdout(predicate::str::contains("(dry run)"));

    // Nothing was written
    assert!(!dir.path().join("resources").exists());
}
