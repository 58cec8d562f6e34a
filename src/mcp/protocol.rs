//! JSON-RPC 2.0 request types for the MCP stdio wire format
//!
//! Messages are newline-delimited JSON, one message per line, UTF-8 encoded.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const JSONRPC_VERSION: &str = "2.0";

/// MCP protocol revision this client advertises during `initialize`
pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";

/// Client identity sent in the `initialize` handshake
pub const CLIENT_NAME: &str = "test-client";
pub const CLIENT_VERSION: &str = "1.0.0";

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: Value,
}

impl JsonRpcRequest {
    pub fn new<P: Serialize>(id: u64, method: &str, params: P) -> Result<Self, serde_json::Error> {
        Ok(Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            method: method.to_string(),
            params: serde_json::to_value(params)?,
        })
    }

    /// The fixed `initialize` handshake request
    pub fn initialize(id: u64) -> Result<Self, serde_json::Error> {
        Self::new(
            id,
            "initialize",
            InitializeParams {
                protocol_version: MCP_PROTOCOL_VERSION.to_string(),
                capabilities: ClientCapabilities::default(),
                client_info: ClientInfo {
                    name: CLIENT_NAME.to_string(),
                    version: CLIENT_VERSION.to_string(),
                },
            },
        )
    }

    /// `tools/list` with empty params
    pub fn tools_list(id: u64) -> Result<Self, serde_json::Error> {
        Self::new(id, "tools/list", Value::Object(Default::default()))
    }

    /// `tools/call` invoking a named tool with the given arguments
    pub fn tools_call(id: u64, tool: &str, arguments: Value) -> Result<Self, serde_json::Error> {
        Self::new(
            id,
            "tools/call",
            CallToolParams {
                name: tool.to_string(),
                arguments,
            },
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    pub protocol_version: String,
    pub capabilities: ClientCapabilities,
    pub client_info: ClientInfo,
}

/// Declares the empty tools capability a tools-only client presents
#[derive(Debug, Default, Serialize)]
pub struct ClientCapabilities {
    pub tools: ToolsCapability,
}

#[derive(Debug, Default, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct ClientInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn initialize_matches_wire_payload() {
        let request = JsonRpcRequest::initialize(1).unwrap();
        let expected = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "protocolVersion": "2024-11-05",
                "capabilities": {"tools": {}},
                "clientInfo": {"name": "test-client", "version": "1.0.0"}
            }
        });
        assert_eq!(serde_json::to_value(&request).unwrap(), expected);
    }

    #[test]
    fn tools_list_matches_wire_payload() {
        let request = JsonRpcRequest::tools_list(2).unwrap();
        let expected = json!({
            "jsonrpc": "2.0",
            "id": 2,
            "method": "tools/list",
            "params": {}
        });
        assert_eq!(serde_json::to_value(&request).unwrap(), expected);
    }

    #[test]
    fn tools_call_matches_wire_payload() {
        let request =
            JsonRpcRequest::tools_call(3, "get_crate_source", json!({"crate_name": "serde"}))
                .unwrap();
        let expected = json!({
            "jsonrpc": "2.0",
            "id": 3,
            "method": "tools/call",
            "params": {
                "name": "get_crate_source",
                "arguments": {"crate_name": "serde"}
            }
        });
        assert_eq!(serde_json::to_value(&request).unwrap(), expected);
    }

    #[test]
    fn requests_serialize_to_a_single_line() {
        let request = JsonRpcRequest::initialize(1).unwrap();
        let line = serde_json::to_string(&request).unwrap();
        assert!(!line.contains('\n'));
    }
}
