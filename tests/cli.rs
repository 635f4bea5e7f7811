use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use httpmock::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("issue-creator");
    cmd.env_remove("ISSUE_CREATOR_GH")
        .env_remove("ISSUE_CREATOR_TEMPLATE")
        .env_remove("OPENROUTER_MODELS_URL")
        .env_remove("OPENROUTER_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

fn config_file(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("issues.json");
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn missing_argument_exits_one() {
    cmd().assert().code(1).stderr(contains("Usage"));
}

#[test]
fn help_exits_zero() {
    cmd().arg("--help").assert().success().stdout(contains("--list-models"));
}

#[test]
fn missing_config_file_exits_one() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    cmd()
        .arg(path)
        .assert()
        .code(1)
        .stderr(contains("Error loading config"));
}

#[test]
fn malformed_config_exits_one() {
    let dir = TempDir::new().unwrap();
    let path = config_file(&dir, "{ \"repo\": ");
    cmd()
        .arg(path)
        .assert()
        .code(1)
        .stderr(contains("failed to parse"));
}

#[test]
fn missing_repo_spawns_nothing() {
    let dir = TempDir::new().unwrap();
    let path = config_file(&dir, r#"{"keywords": {"users": {"create": true}}}"#);
    cmd()
        .args([path.as_str(), "--gh", "echo"])
        .assert()
        .code(1)
        .stderr(contains("repository not specified"))
        .stdout(contains("Successfully").not());
}

#[test]
fn dry_run_prints_plan() {
    let dir = TempDir::new().unwrap();
    let path = config_file(
        &dir,
        r#"{"repo": "acme/shop", "keywords": {"users": {"create": true, "delete": true}, "billing": {}}}"#,
    );
    cmd()
        .args([path.as_str(), "--dry-run", "--gh", "/nonexistent/gh"])
        .assert()
        .success()
        .stdout(
            "Would create issue in acme/shop: As the dev team I want to have billing\n\
             Would create issue in acme/shop: As the dev team I want to be able to create users\n\
             Would create issue in acme/shop: As the dev team I want to be able to delete users\n",
        );
}

#[cfg(unix)]
#[test]
fn successful_tracker_reports_each_issue() {
    let dir = TempDir::new().unwrap();
    let path = config_file(
        &dir,
        r#"{"repo": "acme/shop", "keywords": {"users": {"create": true, "read": true, "update": true, "delete": true}}}"#,
    );
    let out = cmd()
        .args([path.as_str(), "--gh", "true"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(out).unwrap();
    assert_eq!(stdout.matches("Successfully created issue:").count(), 4);
}

#[cfg(unix)]
#[test]
fn failing_tracker_is_logged_and_run_continues() {
    let dir = TempDir::new().unwrap();
    let path = config_file(
        &dir,
        r#"{"repo": "acme/shop", "keywords": {"users": {}, "orders": {}}}"#,
    );
    let out = cmd()
        .args([path.as_str(), "--gh", "false"])
        .assert()
        .success()
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8(out).unwrap();
    assert!(stderr.contains("Error creating issue 'As the dev team I want to have orders'"));
    assert!(stderr.contains("Error creating issue 'As the dev team I want to have users'"));
    assert_eq!(stderr.matches("As the dev team I want to have orders").count(), 1);
    assert!(!stderr.contains("issue creation failed"));
}

#[test]
fn list_models_prints_records() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/models")
            .header("authorization", "Bearer sk-or-cli");
        then.status(200).json_body(serde_json::json!({
            "data": [
                {"id": "a/one", "name": "One", "description": "first"},
                {"id": "b/two", "name": "Two", "description": "second"}
            ]
        }));
    });

    cmd()
        .args(["--list-models", "openrouter/", "--models-url"])
        .arg(server.url("/api/v1/models"))
        .env("OPENROUTER_API_KEY", "sk-or-cli")
        .assert()
        .success()
        .stdout(contains("Available OpenRouter Models:"))
        .stdout(contains("ID: a/one\nName: One\nDescription: first\n"))
        .stdout(contains("ID: b/two\nName: Two\nDescription: second\n"));
}

#[test]
fn list_models_rejected_prints_status_and_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/models");
        then.status(401).body("{\"error\":\"no auth\"}");
    });

    cmd()
        .args(["--list-models", "openrouter/", "--models-url"])
        .arg(server.url("/api/v1/models"))
        .assert()
        .success()
        .stdout("Error: received status code 401\n{\"error\":\"no auth\"}\n");
}
