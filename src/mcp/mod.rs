//! MCP (Model Context Protocol) surface for inventory operations.
//!
//! This module exposes the inventory provider's operations as structured
//! tools that AI agents can discover and execute over JSON-RPC 2.0. It is the
//! crate's reason to exist: everything else feeds it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────────┐
//! │   AI Agent      │───▶│  JSON-RPC layer  │───▶│  InventoryProvider  │
//! │   (Client)      │    │  (This Module)   │    │  (Datastore)        │
//! └─────────────────┘    └──────────────────┘    └─────────────────────┘
//!          │                        │                       │
//!          ▼                        ▼                       ▼
//!    Tool Discovery          Tool Execution          Entity Storage
//!    Schema Learning         Argument Parsing        Business Rules
//! ```
//!
//! ## Module Structure
//!
//! - `core` - Server type, builder, and metadata (`InventoryMcpServer`,
//!   `McpServerInfo`)
//! - `registry` - Explicit tool descriptor table built at construction
//! - `protocol` - JSON-RPC request handling and the stdio loop
//! - `tools/` - JSON schema definitions for tool discovery, one module per
//!   entity kind
//! - `handlers/` - Tool execution handlers, one module per entity kind
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use inventory_mcp::{InMemoryInventory, InventoryMcpServer};
//! use inventory_mcp::context::RequestContext;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let server = InventoryMcpServer::new(InMemoryInventory::new());
//!     let context = RequestContext::with_generated_id();
//!
//!     let created = server
//!         .execute_tool("create_part", json!({"name": "Widget"}), &context)
//!         .await?;
//!     println!("{created}");
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod handlers;
pub mod protocol;
pub mod registry;
pub mod tools;


// Re-export core types for convenience
pub use core::{InventoryMcpServer, InventoryMcpServerBuilder, McpServerInfo};
pub use protocol::{McpErrorObject, McpRequest, McpResponse};
pub use registry::{ToolDescriptor, ToolHandler, ToolRegistry, standard_registry};
