//! Smoke-test harness
//!
//! Drives the fixed initialize -> tools/list -> tools/call conversation
//! against a spawned MCP server, prints each response, and always reaps the
//! server before returning.

use crate::config::HarnessConfig;
use crate::mcp::protocol::JsonRpcRequest;
use crate::mcp::McpClient;
use crate::types::{HarnessError, Result};
use serde_json::Value;
use std::process::ExitStatus;
use tokio::time::timeout;
use tracing::{info, warn};

/// One step of the fixed conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Initialize,
    ListTools,
    CallTool,
}

impl Step {
    pub fn label(self) -> &'static str {
        match self {
            Step::Initialize => "initialize",
            Step::ListTools => "tools/list",
            Step::CallTool => "tools/call",
        }
    }
}

/// Response (or lack of one) observed for a single step.
///
/// `response` is `None` only when the server closed its output stream
/// before replying; any actual reply line, including `null`, is `Some`.
#[derive(Debug)]
pub struct StepOutcome {
    pub step: Step,
    pub response: Option<Value>,
}

/// Everything observed during one full run
#[derive(Debug)]
pub struct SmokeReport {
    pub steps: Vec<StepOutcome>,
    pub server_status: ExitStatus,
}

/// Run the full smoke sequence against the configured server.
///
/// The server is terminated and waited on before this returns, whether the
/// conversation succeeded or failed.
pub async fn run(config: &HarnessConfig) -> Result<SmokeReport> {
    let mut client = McpClient::spawn(&config.server).await?;

    let outcome = drive(&mut client, config).await;

    // Reap the server before surfacing any conversation error.
    let status = client.shutdown().await;

    let steps = outcome?;
    Ok(SmokeReport {
        steps,
        server_status: status?,
    })
}

async fn drive(client: &mut McpClient, config: &HarnessConfig) -> Result<Vec<StepOutcome>> {
    let mut steps = Vec::with_capacity(3);

    let request = JsonRpcRequest::initialize(client.next_id())?;
    steps.push(exchange(client, config, Step::Initialize, request).await?);

    let request = JsonRpcRequest::tools_list(client.next_id())?;
    steps.push(exchange(client, config, Step::ListTools, request).await?);

    let request = JsonRpcRequest::tools_call(
        client.next_id(),
        &config.call.tool,
        config.call.arguments.clone(),
    )?;
    steps.push(exchange(client, config, Step::CallTool, request).await?);

    Ok(steps)
}

async fn exchange(
    client: &mut McpClient,
    config: &HarnessConfig,
    step: Step,
    request: JsonRpcRequest,
) -> Result<StepOutcome> {
    info!("Step {}: sending request {}", step.label(), request.id);

    let response = match config.request_timeout() {
        Some(limit) => timeout(limit, client.send_and_receive(&request))
            .await
            .map_err(|_| HarnessError::Timeout(limit.as_secs()))??,
        None => client.send_and_receive(&request).await?,
    };

    match &response {
        Some(value) => println!("{} response: {}", step.label(), value),
        None => {
            warn!("Step {} got no response", step.label());
            println!(
                "{} response: <no response, server closed its output>",
                step.label()
            );
        }
    }

    Ok(StepOutcome { step, response })
}
