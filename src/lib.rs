//! Inventory management tool server for AI agents.
//!
//! Exposes part, stock, location, and category operations from an inventory
//! backend as Model Context Protocol tools, with a pluggable async provider
//! trait and an in-memory reference implementation.
//!
//! # Core Components
//!
//! - [`InventoryMcpServer`] - MCP server dispatching tool calls to a provider
//! - [`InventoryProvider`] - Trait for implementing inventory backends
//! - [`InMemoryInventory`] - Reference provider backed by process memory
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use inventory_mcp::{InMemoryInventory, InventoryMcpServer};
//! use inventory_mcp::context::RequestContext;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = InMemoryInventory::new();
//! let server = InventoryMcpServer::new(provider);
//! let context = RequestContext::with_generated_id();
//! let output = server
//!     .execute_tool("search_parts", json!({"search": "resistor"}), &context)
//!     .await?;
//! println!("{output}");
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod context;
pub mod error;
pub mod icons;
pub mod image_search;
pub mod mcp;
pub mod model;
pub mod provider;
pub mod serialize;

// Re-export commonly used types for convenience
pub use auth::{AuthError, AuthenticatedUser, TokenValidator};
pub use context::RequestContext;
pub use error::{ToolError, ToolResult};
pub use icons::IconRegistry;
pub use image_search::{ImageSearchClient, ImageSearchConfig, ImageSearchError};
pub use mcp::{InventoryMcpServer, InventoryMcpServerBuilder, McpServerInfo};
pub use model::{Part, PartCategory, StockAction, StockHistoryEntry, StockItem, StockLocation};
pub use provider::{InMemoryInventory, InventoryProvider, ProviderError};
