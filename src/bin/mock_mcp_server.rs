//! Mock MCP stdio server used by the integration tests
//!
//! Reads newline-delimited JSON-RPC requests from stdin and replies one line
//! per request, depending on the mode given as the first argument:
//!
//! - `echo` (default): `{"jsonrpc":"2.0","id":<same id>,"result":"ok"}`
//! - `garbage`: a line that is not valid JSON
//! - `mute`: consumes requests without ever replying
//!
//! Exits when stdin closes.

use serde_json::{json, Value};
use std::io::{BufRead, Write};

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "echo".to_string());

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let reply = match mode.as_str() {
            "mute" => continue,
            "garbage" => "this is not json".to_string(),
            _ => {
                let id = serde_json::from_str::<Value>(&line)
                    .ok()
                    .and_then(|request| request.get("id").cloned())
                    .unwrap_or(Value::Null);
                json!({"jsonrpc": "2.0", "id": id, "result": "ok"}).to_string()
            }
        };

        if writeln!(stdout, "{}", reply)
            .and_then(|_| stdout.flush())
            .is_err()
        {
            break;
        }
    }
}
