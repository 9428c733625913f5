//! MCP tool schema definitions
//!
//! This module contains all the JSON schema definitions for MCP tools that
//! AI agents can discover and execute. The schemas provide structured
//! metadata that enables automatic tool discovery and parameter validation.
//!
//! # Architecture
//!
//! Tool schemas are organized by entity kind:
//! - [`part_schemas`] - Part lifecycle, listing, and image operations
//! - [`category_schemas`] - Part category tree operations
//! - [`location_schemas`] - Stock location tree operations
//! - [`stock_schemas`] - Stock item and quantity operations
//!
//! Each schema defines:
//! - Tool name for AI agent discovery
//! - Human-readable description of functionality and recommended workflow
//! - JSON Schema validation for input parameters
//!
//! # Usage
//!
//! These schemas are consumed by the tool registry and the MCP protocol
//! layer. They are not intended for direct use by application developers;
//! they are registered automatically when the server is built.

pub mod category_schemas;
pub mod location_schemas;
pub mod part_schemas;
pub mod stock_schemas;

// Re-export commonly used schema functions for convenience
pub use category_schemas::*;
pub use location_schemas::*;
pub use part_schemas::*;
pub use stock_schemas::*;
