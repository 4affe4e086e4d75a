//! Integration tests for custom keys, field display options, and the
//! config file.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn jlogfmt() -> Command {
    let mut cmd = Command::cargo_bin("jlogfmt").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/jlogfmt-test-no-config");
    cmd
}

#[test]
fn custom_message_key() {
    let input = r#"{"level":"info","payload":"something happened","port":8080}"#;
    jlogfmt()
        .arg("--color=never")
        .arg("--message-key=payload")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("INFO"))
        .stdout(predicate::str::contains("something happened"))
        .stdout(predicate::str::contains("port=8080"));
}

#[test]
fn custom_level_key() {
    let input = r#"{"importance":"warn","msg":"disk low"}"#;
    jlogfmt()
        .arg("--color=never")
        .arg("--level-key=importance")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("WARN"))
        .stdout(predicate::str::contains("disk low"));
}

#[test]
fn custom_timestamp_key() {
    let input = r#"{"emitted":"2026-01-15T10:30:00Z","level":"info","msg":"hello"}"#;
    jlogfmt()
        .arg("--color=never")
        .arg("--timestamp-key=emitted")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("10:30:00.000"))
        .stdout(predicate::str::contains("hello"));
}

#[test]
fn suppress_fields_hides_specified() {
    let input = r#"{"level":"info","msg":"test","port":8080,"host":"localhost","pid":1234}"#;
    let output = jlogfmt()
        .arg("--color=never")
        .arg("--suppress-fields=pid,host")
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("port=8080"));
    assert!(!stdout.contains("host="), "suppressed field should be hidden");
    assert!(!stdout.contains("pid="), "suppressed field should be hidden");
}

#[test]
fn field_order_puts_named_fields_first() {
    let input = r#"{"msg":"m","status":200,"request_id":"r-1","host":"a1"}"#;
    let output = jlogfmt()
        .arg("--color=never")
        .arg("--field-order=request_id,host")
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let rid = stdout.find("request_id=").unwrap();
    let host = stdout.find("host=").unwrap();
    let status = stdout.find("status=").unwrap();
    assert!(rid < host && host < status, "got: {stdout}");
}

#[test]
fn json_output_mode() {
    let line = r#"{"level":"info","msg":"hello","port":8080}"#;
    jlogfmt()
        .arg("--color=never")
        .arg("--json")
        .write_stdin(format!("{line}\nnot json\n"))
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{line}\n")));
}

#[test]
fn config_file_custom_field_aliases() {
    let config_content = r#"
[fields]
message = ["payload"]
level = ["importance"]
"#;
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    config_file.write_all(config_content.as_bytes()).unwrap();

    let input = r#"{"importance":"warn","payload":"disk full","disk":"/dev/sda1"}"#;
    jlogfmt()
        .arg("--color=never")
        .arg(format!("--config={}", config_file.path().display()))
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("WARN"))
        .stdout(predicate::str::contains("disk full"));
}

#[test]
fn config_file_custom_level_aliases() {
    let config_content = r#"
[levels]
"verbose" = "debug"
"critical" = "fatal"
"#;
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    config_file.write_all(config_content.as_bytes()).unwrap();

    let input = "{\"level\":\"verbose\",\"msg\":\"detailed info\"}\n{\"level\":\"critical\",\"msg\":\"system failure\"}\n";
    let output = jlogfmt()
        .arg("--color=never")
        .arg(format!("--config={}", config_file.path().display()))
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("DEBUG"), "verbose should map to DEBUG");
    assert!(stdout.contains("FATAL"), "critical should map to FATAL");
}

#[test]
fn config_file_suppress_list() {
    let config_content = "suppress = [\"pid\"]\n";
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    config_file.write_all(config_content.as_bytes()).unwrap();

    let output = jlogfmt()
        .arg("--color=never")
        .arg(format!("--config={}", config_file.path().display()))
        .write_stdin(r#"{"msg":"up","pid":4242,"host":"a1"}"#)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("host=a1"));
    assert!(!stdout.contains("pid="));
}

#[test]
fn cli_overrides_config_file() {
    let config_content = r#"
[fields]
message = ["payload"]
"#;
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    config_file.write_all(config_content.as_bytes()).unwrap();

    let input = r#"{"body":"from body","payload":"from payload"}"#;
    jlogfmt()
        .arg("--color=never")
        .arg(format!("--config={}", config_file.path().display()))
        .arg("--message-key=body")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("from body"));
}

#[test]
fn unreadable_config_file_is_an_error() {
    let config_content = "this is not toml = = =\n";
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    config_file.write_all(config_content.as_bytes()).unwrap();

    jlogfmt()
        .arg(format!("--config={}", config_file.path().display()))
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config file error"));
}
