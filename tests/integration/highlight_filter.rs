//! Integration tests for `color:regex` highlight patterns and `--filter`.

use assert_cmd::Command;
use predicates::prelude::*;

fn jlogfmt() -> Command {
    let mut cmd = Command::cargo_bin("jlogfmt").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/jlogfmt-test-no-config");
    cmd
}

#[test]
fn patterns_paint_matches_when_colored() {
    let output = jlogfmt()
        .arg("--color=always")
        .args(["-p", "31:full"])
        .write_stdin(r#"{"msg":"disk full"}"#)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\x1b[31m"), "expected red span, got: {stdout:?}");
}

#[test]
fn patterns_are_inert_without_color() {
    let output = jlogfmt()
        .arg("--color=never")
        .args(["-p", "31:full"])
        .write_stdin(r#"{"msg":"disk full"}"#)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains('\x1b'));
    assert!(stdout.contains("disk full"));
}

#[test]
fn filter_keeps_only_matching_lines() {
    let input = "{\"msg\":\"disk full\"}\n{\"msg\":\"all quiet\"}\n";
    jlogfmt()
        .arg("--color=never")
        .args(["-p", "31:disk", "--filter"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("disk full"))
        .stdout(predicate::str::contains("all quiet").not());
}

#[test]
fn filter_applies_to_malformed_lines_too() {
    let input = "disk exploded\nnothing here\n";
    jlogfmt()
        .arg("--color=never")
        .args(["-p", "31:disk", "--filter"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("disk exploded"))
        .stdout(predicate::str::contains("nothing here").not());
}

#[test]
fn filter_without_pattern_is_rejected() {
    jlogfmt()
        .arg("--filter")
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--filter requires"));
}

#[test]
fn unsupported_color_code_is_rejected() {
    jlogfmt()
        .args(["-p", "42:oops"])
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unsupported color code"));
}

#[test]
fn invalid_regex_is_rejected() {
    jlogfmt()
        .args(["-p", "31:("])
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid pattern"));
}
