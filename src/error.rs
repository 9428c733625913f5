//! Error types for tool execution.
//!
//! Tool handlers distinguish two failure channels. Expected, in-band outcomes
//! (a part that does not exist, a validation miss, a misconfigured image
//! search) are returned to the caller as ordinary tool output and never appear
//! here. [`ToolError`] is the other channel: unexpected faults from the
//! persistence collaborator or from serialization, surfaced to the protocol
//! layer which maps them to JSON-RPC error objects.

/// Fault raised by a tool handler.
///
/// A `ToolError` is never rendered into the `{"error": ...}` payloads that
/// tools return for expected failures; it travels the JSON-RPC error channel
/// instead. Callers must treat the two channels distinctly.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Errors from the inventory provider during a primary mutation or query
    #[error("Provider error: {0}")]
    Provider(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Dispatch miss: no tool registered under the requested name
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    /// Internal invariant violations
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ToolError {
    /// Wrap a provider error.
    pub fn provider<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Provider(Box::new(error))
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create an unknown-tool error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool { name: name.into() }
    }
}

/// Result type alias for tool handlers.
pub type ToolResult<T> = Result<T, ToolError>;
