//! Core MCP server type and construction.
//!
//! This module contains the foundational types for the MCP surface. The
//! server owns the inventory provider, the tool registry, and the optional
//! icon and image-search facilities that some tools depend on.

use log::warn;

use super::registry::{ToolRegistry, standard_registry};
use crate::icons::IconRegistry;
use crate::image_search::{ImageSearchClient, ImageSearchConfig};
use crate::provider::InventoryProvider;

/// Information about the MCP server for AI agent discovery
///
/// This structure provides metadata that AI agents use to understand
/// the capabilities and context of the inventory server.
///
/// # Examples
///
/// ```rust
/// use inventory_mcp::mcp::McpServerInfo;
///
/// let server_info = McpServerInfo {
///     name: "Workshop Inventory".to_string(),
///     version: "2.0.0".to_string(),
///     description: "Inventory server for the electronics workshop".to_string(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct McpServerInfo {
    /// Human-readable name of the inventory server
    pub name: String,
    /// Version string for the server implementation
    pub version: String,
    /// Description of the server's purpose and capabilities
    pub description: String,
}

impl Default for McpServerInfo {
    fn default() -> Self {
        Self {
            name: "Inventory MCP Server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Inventory management tools for parts, categories, locations, and stock"
                .to_string(),
        }
    }
}

/// MCP server wrapper for inventory operations
///
/// This is the main entry point for the MCP surface. It wraps an inventory
/// provider and exposes its operations as MCP tools that AI agents can
/// discover and execute.
///
/// # Type Parameters
///
/// * `P` - The inventory provider implementation that handles data persistence
///
/// # Examples
///
/// ```rust,no_run
/// use inventory_mcp::{InMemoryInventory, InventoryMcpServer};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///     let server = InventoryMcpServer::new(InMemoryInventory::new());
///
///     // Get available tool schemas
///     let tools = server.tool_schemas();
///     println!("Available tools: {}", tools.len());
///
///     // Serve JSON-RPC over stdio
///     server.run_stdio(None).await?;
///     Ok(())
/// }
/// ```
pub struct InventoryMcpServer<P: InventoryProvider> {
    pub(crate) provider: P,
    pub(crate) registry: ToolRegistry<P>,
    pub(crate) icons: IconRegistry,
    pub(crate) image_search: Option<ImageSearchClient>,
    pub(crate) server_info: McpServerInfo,
}

impl<P: InventoryProvider + Send + Sync + 'static> InventoryMcpServer<P> {
    /// Create a server with default configuration.
    ///
    /// Icons are discovered from the well-known filesystem paths, and image
    /// search is enabled when `GOOGLE_API_KEY` and `GOOGLE_CSE_ID` are set.
    /// A failure to construct the image client downgrades to a warning; the
    /// server still runs with the `search_part_images` tool reporting its
    /// missing configuration.
    pub fn new(provider: P) -> Self {
        let mut builder = Self::builder(provider);
        if let Some(config) = ImageSearchConfig::from_env() {
            match ImageSearchClient::new(config) {
                Ok(client) => builder = builder.image_search(client),
                Err(e) => warn!("Image search disabled: {e}"),
            }
        }
        builder.build()
    }

    /// Start building a server with explicit configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inventory_mcp::{IconRegistry, InMemoryInventory, InventoryMcpServer};
    /// use inventory_mcp::mcp::McpServerInfo;
    ///
    /// let server = InventoryMcpServer::builder(InMemoryInventory::new())
    ///     .icon_registry(IconRegistry::empty())
    ///     .server_info(McpServerInfo {
    ///         name: "Lab Inventory".to_string(),
    ///         ..McpServerInfo::default()
    ///     })
    ///     .build();
    /// assert_eq!(server.server_info().name, "Lab Inventory");
    /// ```
    pub fn builder(provider: P) -> InventoryMcpServerBuilder<P> {
        InventoryMcpServerBuilder {
            provider,
            icons: None,
            image_search: None,
            server_info: McpServerInfo::default(),
        }
    }

    /// Access the wrapped provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Get server information for introspection
    ///
    /// Returns a reference to the server metadata that AI agents use for
    /// discovery. This is primarily used for testing and debugging purposes.
    pub fn server_info(&self) -> &McpServerInfo {
        &self.server_info
    }
}

/// Staged configuration for [`InventoryMcpServer`].
///
/// Produced by [`InventoryMcpServer::builder`]. Every knob is optional;
/// `build` fills in the defaults.
pub struct InventoryMcpServerBuilder<P: InventoryProvider> {
    provider: P,
    icons: Option<IconRegistry>,
    image_search: Option<ImageSearchClient>,
    server_info: McpServerInfo,
}

impl<P: InventoryProvider + Send + Sync + 'static> InventoryMcpServerBuilder<P> {
    /// Use an explicit icon registry instead of filesystem discovery.
    pub fn icon_registry(mut self, icons: IconRegistry) -> Self {
        self.icons = Some(icons);
        self
    }

    /// Enable image search with a pre-built client.
    pub fn image_search(mut self, client: ImageSearchClient) -> Self {
        self.image_search = Some(client);
        self
    }

    /// Override the server metadata reported to clients.
    pub fn server_info(mut self, server_info: McpServerInfo) -> Self {
        self.server_info = server_info;
        self
    }

    /// Finish construction, registering the standard tool set.
    pub fn build(self) -> InventoryMcpServer<P> {
        InventoryMcpServer {
            provider: self.provider,
            registry: standard_registry::<P>(),
            icons: self.icons.unwrap_or_else(IconRegistry::discover),
            image_search: self.image_search,
            server_info: self.server_info,
        }
    }
}
