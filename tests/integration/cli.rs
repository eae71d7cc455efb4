#![allow(missing_docs)]

use std::fs;

use assert_cmd::Command;
use tempfile::tempdir;

fn undirect() -> Command {
    Command::cargo_bin("undirect").unwrap()
}

#[test]
fn missing_required_arguments_fail() {
    undirect().assert().failure();
}

#[test]
fn unknown_format_fails_with_diagnostic() {
    let dir = tempdir().unwrap();
    undirect()
        .args(["-i", "in.mtx", "-o", "out.mtx", "-f", "mtx2"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("mtx2"));
}

#[test]
fn help_exits_non_zero() {
    undirect()
        .arg("-h")
        .assert()
        .failure()
        .stdout(predicates::str::contains("Usage"));
}

#[test]
fn unreadable_input_fails() {
    let dir = tempdir().unwrap();
    undirect()
        .args(["-i", "absent.coo", "-o", "out.coo", "-f", "coo", "-g", "coo"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("error:"));
}

#[test]
fn converts_coo_to_mtx() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.coo");
    let output = dir.path().join("out.mtx");
    fs::write(&input, "3 3 3\n1 2\n2 3\n1 3\n").unwrap();

    undirect()
        .args([
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-f",
            "coo",
        ])
        .assert()
        .success();

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(
        text,
        "%%MatrixMarket matrix coordinate pattern general\n3 3 6\n1 2\n1 3\n2 1\n2 3\n3 1\n3 2\n"
    );
}
