//! MCP stdio client
//!
//! Spawns an MCP server as a child process and exchanges newline-delimited
//! JSON-RPC messages over its stdin/stdout pipes. The conversation is
//! strictly sequential: one request is written, then exactly one response
//! line is read before the next request goes out.

use crate::config::ServerConfig;
use crate::mcp::protocol::JsonRpcRequest;
use crate::types::{HarnessError, Result};
use futures::StreamExt;
use serde_json::Value;
use std::process::{ExitStatus, Stdio};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, ChildStderr, ChildStdin, ChildStdout, Command};
use tokio_util::codec::{FramedRead, LinesCodec, LinesCodecError};
use tracing::{debug, info, warn};

pub struct McpClient {
    child: Child,
    stdin: ChildStdin,
    stdout: FramedRead<ChildStdout, LinesCodec>,
    next_id: u64,
}

impl McpClient {
    /// Spawn the MCP server and take ownership of its three stdio pipes
    pub async fn spawn(config: &ServerConfig) -> Result<Self> {
        info!(
            "Spawning MCP server: {} {}",
            config.command,
            config.args.join(" ")
        );

        let mut command = Command::new(&config.command);
        command
            .args(&config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(cwd) = &config.cwd {
            command.current_dir(cwd);
        }

        for (key, value) in &config.env {
            command.env(key, value);
        }

        let mut child = command.spawn().map_err(|source| HarnessError::Spawn {
            command: config.command.clone(),
            source,
        })?;

        let stdin = child.stdin.take().ok_or(HarnessError::Pipe("stdin"))?;
        let stdout = child.stdout.take().ok_or(HarnessError::Pipe("stdout"))?;
        let stderr = child.stderr.take().ok_or(HarnessError::Pipe("stderr"))?;

        tokio::spawn(Self::drain_stderr(stderr));

        Ok(Self {
            child,
            stdin,
            stdout: FramedRead::new(stdout, LinesCodec::new()),
            next_id: 1,
        })
    }

    /// Forward server stderr to the log so a chatty server (e.g. cargo
    /// building the target first) cannot fill the pipe and stall
    async fn drain_stderr(stderr: ChildStderr) {
        let mut lines = BufReader::new(stderr).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            debug!(target: "mcp_smoke::server_stderr", "{}", line);
        }
    }

    /// Next request id, starting at 1
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Send one request and read exactly one response line.
    ///
    /// Returns `Ok(None)` when the server closed its output stream before
    /// replying. A response line that is not valid JSON propagates as a
    /// `Json` error; it is never retried or suppressed.
    pub async fn send_and_receive(&mut self, request: &JsonRpcRequest) -> Result<Option<Value>> {
        let message = serde_json::to_string(request)?;
        debug!("Sending request {} ({})", request.id, request.method);

        self.stdin.write_all(message.as_bytes()).await?;
        self.stdin.write_all(b"\n").await?;
        self.stdin.flush().await?;

        loop {
            match self.stdout.next().await {
                Some(Ok(line)) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    debug!("Received response for request {}", request.id);
                    return Ok(Some(serde_json::from_str(line)?));
                }
                Some(Err(LinesCodecError::Io(e))) => return Err(e.into()),
                Some(Err(e)) => return Err(HarnessError::Protocol(e.to_string())),
                None => {
                    warn!(
                        "Server closed stdout before replying to request {}",
                        request.id
                    );
                    return Ok(None);
                }
            }
        }
    }

    /// Terminate the server and wait for it to exit.
    ///
    /// Closes stdin first so a well-behaved server can exit on EOF, then
    /// sends the kill signal and reaps the process. The kill signal failing
    /// to deliver means the server already exited; the wait still reaps it.
    pub async fn shutdown(mut self) -> Result<ExitStatus> {
        drop(self.stdin);

        if let Err(e) = self.child.start_kill() {
            debug!("Kill signal not delivered (server already exited?): {}", e);
        }

        let status = self.child.wait().await?;
        info!("MCP server exited: {}", status);
        Ok(status)
    }
}
