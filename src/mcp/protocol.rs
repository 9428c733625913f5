//! JSON-RPC 2.0 protocol layer and the stdio transport.
//!
//! This module handles the wire protocol between AI agents and the server:
//! request parsing, method routing (`initialize`, `tools/list`, `tools/call`,
//! `ping`), error code mapping, and the newline-delimited stdio loop.
//!
//! Two failure channels exist by contract. Domain failures (a missing part,
//! an invalid icon) come back as *successful* responses whose text payload
//! carries the failure, so agents can read and react to them. Transport
//! faults (unreachable datastore, broken JSON) become JSON-RPC error objects.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use super::core::InventoryMcpServer;
use crate::auth::AuthenticatedUser;
use crate::context::RequestContext;
use crate::error::ToolError;
use crate::provider::InventoryProvider;

/// MCP protocol revision implemented by this server.
pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";

/// Malformed JSON on the wire.
pub const PARSE_ERROR: i64 = -32700;
/// Unknown JSON-RPC method.
pub const METHOD_NOT_FOUND: i64 = -32601;
/// Missing tool name, or a name no tool is registered under.
pub const INVALID_PARAMS: i64 = -32602;
/// Tool execution hit a transport fault.
pub const TOOL_ERROR: i64 = -32000;

/// An incoming JSON-RPC request.
///
/// Lenient by design: `jsonrpc` and `id` are optional so that requests from
/// sloppy clients still parse. A request without an `id` (or with a null one)
/// is a notification and gets no response.
#[derive(Debug, Clone, Deserialize)]
pub struct McpRequest {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// An outgoing JSON-RPC response.
#[derive(Debug, Clone, Serialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpErrorObject>,
}

/// JSON-RPC error object.
#[derive(Debug, Clone, Serialize)]
pub struct McpErrorObject {
    pub code: i64,
    pub message: String,
}

impl McpResponse {
    /// Build a success response.
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Build an error response.
    pub fn error(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(McpErrorObject {
                code,
                message: message.into(),
            }),
        }
    }
}

impl<P: InventoryProvider + Send + Sync + 'static> InventoryMcpServer<P> {
    /// Get the list of available MCP tools as JSON
    ///
    /// Returns all tool definitions that AI agents can discover and execute.
    /// Each tool includes its schema, parameters, and documentation.
    pub fn tool_schemas(&self) -> Vec<Value> {
        self.registry.schemas()
    }

    /// Registered tool names, in advertisement order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.registry.names()
    }

    /// Execute a tool by name with arguments
    ///
    /// This is the main dispatch function that routes tool execution requests
    /// to the registered handler for the tool name.
    ///
    /// # Arguments
    /// * `tool_name` - The name of the tool to execute
    /// * `arguments` - JSON arguments for the tool execution
    /// * `context` - Request context carrying the ID and optional actor
    ///
    /// # Returns
    /// The rendered text payload on success. Domain failures ("Part 7 not
    /// found") are part of the payload; only transport faults come back as
    /// [`ToolError`].
    pub async fn execute_tool(
        &self,
        tool_name: &str,
        arguments: Value,
        context: &RequestContext,
    ) -> Result<String, ToolError> {
        debug!(
            "Executing MCP tool: {} with args: {} [request {}]",
            tool_name, arguments, context.request_id
        );

        let tool = self
            .registry
            .get(tool_name)
            .ok_or_else(|| ToolError::unknown_tool(tool_name))?;
        (tool.handler)(self, arguments, context).await
    }

    /// Handle one raw JSON-RPC request line.
    ///
    /// Returns `None` for notifications (requests without an `id`), which by
    /// JSON-RPC rules must not be answered.
    pub async fn handle_rpc_request(
        &self,
        raw: &str,
        context: &RequestContext,
    ) -> Option<McpResponse> {
        let request: McpRequest = match serde_json::from_str(raw) {
            Ok(request) => request,
            Err(e) => {
                return Some(McpResponse::error(
                    Value::Null,
                    PARSE_ERROR,
                    format!("Parse error: {e}"),
                ));
            }
        };

        let id = match request.id {
            Some(id) if !id.is_null() => id,
            _ => {
                debug!("Ignoring notification: {}", request.method);
                return None;
            }
        };

        let response = match request.method.as_str() {
            "initialize" => McpResponse::success(
                id,
                json!({
                    "protocolVersion": MCP_PROTOCOL_VERSION,
                    "capabilities": {
                        "tools": {}
                    },
                    "serverInfo": {
                        "name": self.server_info.name,
                        "version": self.server_info.version,
                        "description": self.server_info.description,
                    }
                }),
            ),
            "tools/list" => McpResponse::success(id, json!({"tools": self.registry.schemas()})),
            "tools/call" => {
                let params = request.params.unwrap_or(Value::Null);
                let Some(name) = params.get("name").and_then(Value::as_str) else {
                    return Some(McpResponse::error(id, INVALID_PARAMS, "Missing tool name"));
                };
                let arguments = params
                    .get("arguments")
                    .cloned()
                    .unwrap_or_else(|| json!({}));

                match self.execute_tool(name, arguments, context).await {
                    Ok(text) => McpResponse::success(
                        id,
                        json!({
                            "content": [{"type": "text", "text": text}],
                            "isError": false,
                        }),
                    ),
                    Err(ToolError::UnknownTool { name }) => {
                        McpResponse::error(id, INVALID_PARAMS, format!("Unknown tool: {name}"))
                    }
                    Err(e) => McpResponse::error(id, TOOL_ERROR, e.to_string()),
                }
            }
            "ping" => McpResponse::success(id, json!({})),
            other => {
                McpResponse::error(id, METHOD_NOT_FOUND, format!("Method not found: {other}"))
            }
        };
        Some(response)
    }

    /// Run the MCP server over stdio.
    ///
    /// Reads newline-delimited JSON-RPC requests from stdin and writes one
    /// response line per request to stdout, flushing after each. Blank lines
    /// and notifications produce no output. Returns when stdin closes.
    ///
    /// Every request line runs under a fresh [`RequestContext`]; when `actor`
    /// is given, all tool executions are attributed to that user.
    pub async fn run_stdio(
        &self,
        actor: Option<AuthenticatedUser>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        info!(
            "{} v{} ready for stdio communication",
            self.server_info.name, self.server_info.version
        );
        info!("Available tools: {:?}", self.registry.names());

        let stdin = tokio::io::stdin();
        let mut stdout = tokio::io::stdout();
        let mut lines = BufReader::new(stdin).lines();

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let context = match &actor {
                Some(actor) => RequestContext::authenticated(actor.clone()),
                None => RequestContext::with_generated_id(),
            };

            if let Some(response) = self.handle_rpc_request(line, &context).await {
                let mut payload = serde_json::to_string(&response)?;
                payload.push('\n');
                stdout.write_all(payload.as_bytes()).await?;
                stdout.flush().await?;
            }
        }

        info!("stdin closed, shutting down");
        Ok(())
    }
}
