//! Integration tests for malformed-line handling and run summaries.

use assert_cmd::Command;
use predicates::prelude::*;

fn jlogfmt() -> Command {
    let mut cmd = Command::cargo_bin("jlogfmt").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/jlogfmt-test-no-config");
    cmd
}

#[test]
fn malformed_line_is_tagged_with_index() {
    jlogfmt()
        .arg("--color=never")
        .arg("--summary")
        .write_stdin("not json at all\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1]"))
        .stdout(predicate::str::contains("not json at all"))
        .stderr(predicate::str::contains("1 lines processed, 1 malformed"));
}

#[test]
fn one_output_line_per_input_line_with_mixed_input() {
    let input = std::fs::read_to_string("tests/fixtures/mixed.jsonl").unwrap();
    let assert = jlogfmt()
        .arg("--color=never")
        .arg("--summary")
        .write_stdin(input)
        .assert()
        .success()
        .stderr(predicate::str::contains("5 lines processed, 2 malformed"));
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert_eq!(stdout.lines().count(), 5, "got: {stdout}");
}

#[test]
fn malformed_lines_keep_stream_order() {
    let input = "{\"msg\":\"fine\"}\ngarbage\n{\"msg\":\"also fine\"}\n";
    let output = jlogfmt()
        .arg("--color=never")
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].contains("fine"));
    assert!(lines[1].contains("[2]") && lines[1].contains("garbage"));
    assert!(lines[2].contains("also fine"));
}

#[test]
fn top_level_array_is_malformed() {
    jlogfmt()
        .arg("--color=never")
        .arg("--summary")
        .write_stdin("[1, 2, 3]\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1]"))
        .stderr(predicate::str::contains("1 malformed"));
}

#[test]
fn empty_line_is_malformed_but_not_fatal() {
    jlogfmt()
        .arg("--color=never")
        .arg("--summary")
        .write_stdin("\n{\"msg\":\"after the gap\"}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("after the gap"))
        .stderr(predicate::str::contains("2 lines processed, 1 malformed"));
}

#[test]
fn unrecognized_level_keeps_original_discoverable() {
    jlogfmt()
        .arg("--color=never")
        .write_stdin(r#"{"level":"bogus","msg":"x"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("UNKWN"))
        .stdout(predicate::str::contains("level_raw=bogus"));
}

#[test]
fn summarize_errors_hides_raw_text() {
    jlogfmt()
        .arg("--color=never")
        .arg("--summarize-errors")
        .write_stdin("secret garbage\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("malformed record"))
        .stdout(predicate::str::contains("secret garbage").not());
}

#[test]
fn verbose_shows_parse_error_detail() {
    jlogfmt()
        .arg("--color=never")
        .arg("--verbose")
        .write_stdin("{\"level\":\"info\",\"msg\":\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1]"))
        // serde_json's error text mentions the position
        .stdout(predicate::str::contains("column"));
}
