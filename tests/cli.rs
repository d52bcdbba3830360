use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const CANONICAL: &str = "{\n\t\"a\": 1,\n\t\"b\": [\n\t\t2,\n\t\t3\n\t]\n}";

fn jsonfmt() -> Command {
    Command::cargo_bin("jsonfmt").unwrap()
}

#[test]
fn formats_stdin_to_stdout() {
    jsonfmt()
        .write_stdin(r#"{"a":1,"b":[2,3]}"#)
        .assert()
        .success()
        .stdout(CANONICAL)
        .stderr("");
}

#[test]
fn canonical_stdin_prints_nothing() {
    jsonfmt()
        .write_stdin(CANONICAL)
        .assert()
        .success()
        .stdout("")
        .stderr("");
}

#[test]
fn malformed_stdin_exits_2_with_diagnostic() {
    jsonfmt()
        .write_stdin("{\n  \"a\": tru}")
        .assert()
        .failure()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains(
            "failed with error: Cannot parse JSON schema due to a syntax error at line 2, character",
        ));
}

#[test]
fn write_flag_rewrites_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, r#"{"a":1,"b":[2,3]}"#).unwrap();

    jsonfmt()
        .arg("-w")
        .arg(&path)
        .assert()
        .success()
        .stdout("")
        .stderr("");

    assert_eq!(fs::read_to_string(&path).unwrap(), CANONICAL);
}

#[test]
fn write_flag_leaves_canonical_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, CANONICAL).unwrap();

    // Read-only: an overwrite attempt would make the run fail.
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_readonly(true);
    fs::set_permissions(&path, perms).unwrap();

    jsonfmt().arg("-w").arg(&path).assert().success().stdout("");
}

#[test]
fn bad_path_is_reported_but_later_arguments_still_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, r#"{"a":1,"b":[2,3]}"#).unwrap();

    jsonfmt()
        .arg(dir.path().join("no-such-file.json"))
        .arg(&path)
        .assert()
        .failure()
        .code(2)
        .stdout(CANONICAL)
        .stderr(predicate::str::contains("cannot stat"));
}

#[test]
fn directory_argument_walks_visible_json_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.json"), r#"{"a":1,"b":[2,3]}"#).unwrap();
    fs::write(dir.path().join(".b.json"), r#"{"hidden":true}"#).unwrap();
    fs::write(dir.path().join("c.txt"), "plain text").unwrap();

    jsonfmt()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(CANONICAL)
        .stderr("");
}

#[test]
fn file_argument_is_processed_regardless_of_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.txt");
    fs::write(&path, r#"{"a":1,"b":[2,3]}"#).unwrap();

    jsonfmt().arg(&path).assert().success().stdout(CANONICAL);
}
