use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn fix_prints_report_envelope() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("main.ts"), "export * from \"./app.js\";\n").unwrap();

    Command::cargo_bin("importfix")
        .unwrap()
        .args(["fix", "--path"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": true"))
        .stdout(predicate::str::contains("\"files_found\": 1"))
        .stdout(predicate::str::contains("\"files_fixed\": 1"));

    assert_eq!(
        fs::read_to_string(dir.path().join("main.ts")).unwrap(),
        "export * from \"./app\";\n"
    );
}

#[test]
fn missing_root_exits_cleanly() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("importfix")
        .unwrap()
        .args(["fix", "--path"])
        .arg(dir.path().join("nope"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"root_found\": false"))
        .stdout(predicate::str::contains("Project root not found"))
        .stdout(predicate::str::contains("\"files_fixed\": 0"));
}

#[test]
fn blank_path_is_a_validation_error() {
    Command::cargo_bin("importfix")
        .unwrap()
        .args(["fix", "--path", " "])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("validation.invalid_argument"));
}
