//! End-to-end CLI tests that do not enter the terminal UI.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_the_viewer() {
    Command::cargo_bin("warpview")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("deformation field viewer"))
        .stdout(predicate::str::contains("--tolerance"))
        .stdout(predicate::str::contains("--demo"));
}

#[test]
fn missing_path_fails_before_touching_the_terminal() {
    Command::cargo_bin("warpview")
        .unwrap()
        .arg("/no/such/file.csv")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Path not found"));
}
