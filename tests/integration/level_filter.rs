//! Integration tests for minimum-level filtering.

use assert_cmd::Command;
use predicates::prelude::*;

fn jlogfmt() -> Command {
    let mut cmd = Command::cargo_bin("jlogfmt").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/jlogfmt-test-no-config");
    cmd
}

#[test]
fn hides_records_below_threshold() {
    let input = "{\"level\":\"info\",\"msg\":\"quiet\"}\n{\"level\":\"error\",\"msg\":\"loud\"}\n";
    jlogfmt()
        .arg("--color=never")
        .args(["-l", "warn"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("loud"))
        .stdout(predicate::str::contains("quiet").not());
}

#[test]
fn records_without_level_always_pass() {
    let input = "{\"msg\":\"no level\"}\n";
    jlogfmt()
        .arg("--color=never")
        .args(["-l", "error"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("no level"));
}

#[test]
fn unknown_level_always_passes() {
    let input = "{\"level\":\"bogus\",\"msg\":\"still here\"}\n";
    jlogfmt()
        .arg("--color=never")
        .args(["-l", "error"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("still here"));
}

#[test]
fn malformed_lines_are_not_level_filtered() {
    jlogfmt()
        .arg("--color=never")
        .args(["-l", "error"])
        .write_stdin("plain garbage\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("plain garbage"));
}

#[test]
fn numeric_levels_are_filtered() {
    // pino: 30 = info, 50 = error
    let input = "{\"level\":30,\"msg\":\"routine\"}\n{\"level\":50,\"msg\":\"bad\"}\n";
    jlogfmt()
        .arg("--color=never")
        .args(["-l", "warn"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("bad"))
        .stdout(predicate::str::contains("routine").not());
}

#[test]
fn invalid_level_argument_is_rejected() {
    jlogfmt()
        .args(["-l", "loudest"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid level"));
}
