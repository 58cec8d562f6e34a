//! CLI-level checks for the mcp-smoke binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn prints_labelled_responses_from_the_echo_server() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("smoke.toml");
    std::fs::write(
        &config_path,
        format!(
            "[server]\ncommand = \"{}\"\n",
            env!("CARGO_BIN_EXE_mock_mcp_server").replace('\\', "\\\\"),
        ),
    )
    .unwrap();

    Command::cargo_bin("mcp-smoke")
        .unwrap()
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("initialize response:")
                .and(predicate::str::contains("tools/list response:"))
                .and(predicate::str::contains("tools/call response:"))
                .and(predicate::str::contains("\"result\":\"ok\"")),
        );
}

#[test]
fn trailing_args_override_the_server_command() {
    Command::cargo_bin("mcp-smoke")
        .unwrap()
        .arg("--")
        .arg(env!("CARGO_BIN_EXE_mock_mcp_server"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"result\":\"ok\""));
}

#[test]
fn missing_config_file_fails() {
    Command::cargo_bin("mcp-smoke")
        .unwrap()
        .arg("--config")
        .arg("/nonexistent/mcp-smoke.toml")
        .assert()
        .failure();
}
