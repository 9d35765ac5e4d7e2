#![allow(deprecated)] // TODO: cargo_bin → cargo_bin_cmd! へ移行

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

/// CLIヘルプが正しく表示されることを確認
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("cfn-loggroup").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("invoke"))
        .stdout(predicate::str::contains("name"));
}

/// 同じトークンなら同じ名前が生成されることを確認
#[test]
fn test_name_is_deterministic() {
    let run = || {
        let output = Command::cargo_bin("cfn-loggroup")
            .unwrap()
            .args(["name", "--logical-id", "AppLogs", "--stack", "orders", "--token", "abc"])
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    };

    let first = run();
    assert!(first.starts_with("orders-AppLogs-"));
    assert_eq!(first.len(), "orders-AppLogs-".len() + 12);
    assert_eq!(first, run());
}

#[test]
fn test_name_defaults_logical_id() {
    let mut cmd = Command::cargo_bin("cfn-loggroup").unwrap();
    cmd.arg("name")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("LogGroup-"));
}

#[test]
fn test_invoke_missing_event_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("cfn-loggroup").unwrap();
    cmd.arg("invoke")
        .arg("--event")
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_invoke_rejects_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let event = dir.path().join("event.json");
    fs::write(&event, "{ not json").unwrap();

    let mut cmd = Command::cargo_bin("cfn-loggroup").unwrap();
    cmd.arg("invoke")
        .arg("--event")
        .arg(&event)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}
