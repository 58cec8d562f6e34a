//! End-to-end smoke runs against the mock MCP server binary

use mcp_smoke::{harness, HarnessConfig, HarnessError};
use serde_json::json;
use std::time::Duration;

fn mock_config(mode: &str) -> HarnessConfig {
    let mut config = HarnessConfig::default();
    config.server.command = env!("CARGO_BIN_EXE_mock_mcp_server").to_string();
    config.server.args = vec![mode.to_string()];
    config
}

#[tokio::test]
async fn echo_server_answers_all_three_steps_in_order() {
    // run() only returns once the server has been terminated and waited on.
    let report = harness::run(&mock_config("echo")).await.expect("run failed");

    assert_eq!(report.steps.len(), 3);
    let labels: Vec<_> = report.steps.iter().map(|step| step.step.label()).collect();
    assert_eq!(labels, ["initialize", "tools/list", "tools/call"]);

    for (index, step) in report.steps.iter().enumerate() {
        let response = step.response.as_ref().expect("missing response");
        assert_eq!(response["jsonrpc"], "2.0");
        assert_eq!(response["id"], json!(index as u64 + 1));
        assert_eq!(response["result"], "ok");
    }
}

#[tokio::test]
async fn malformed_response_propagates_as_json_error() {
    let err = harness::run(&mock_config("garbage"))
        .await
        .expect_err("a non-JSON response line must fail the run");
    assert!(matches!(err, HarnessError::Json(_)), "got {err:?}");
}

#[tokio::test]
async fn request_timeout_fires_when_server_stays_silent() {
    let mut config = mock_config("mute");
    config.request_timeout_secs = Some(1);

    let err = harness::run(&config)
        .await
        .expect_err("a silent server must trip the configured timeout");
    assert!(matches!(err, HarnessError::Timeout(1)), "got {err:?}");
}

#[tokio::test]
async fn spawn_failure_is_reported() {
    let mut config = HarnessConfig::default();
    config.server.command = "/nonexistent/mcp-server-binary".to_string();
    config.server.args.clear();

    let err = harness::run(&config)
        .await
        .expect_err("spawning a missing binary must fail");
    assert!(matches!(err, HarnessError::Spawn { .. }), "got {err:?}");
}

// A server that closes stdout but keeps reading stdin: every step yields the
// explicit no-response marker and the sequence still runs to completion.
#[cfg(unix)]
#[tokio::test]
async fn closed_output_stream_yields_no_response_markers() {
    let mut config = HarnessConfig::default();
    config.server.command = "sh".to_string();
    config.server.args = vec![
        "-c".to_string(),
        "exec >&-; while read -r _; do :; done".to_string(),
    ];

    let report = tokio::time::timeout(Duration::from_secs(30), harness::run(&config))
        .await
        .expect("harness hung instead of treating EOF as no-response")
        .expect("run failed");

    assert_eq!(report.steps.len(), 3);
    assert!(report.steps.iter().all(|step| step.response.is_none()));
}
