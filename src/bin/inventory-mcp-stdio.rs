//! Newline-delimited JSON-RPC server over stdin/stdout.
//!
//! Serves the full inventory tool catalog against the in-memory provider.
//! Protocol traffic uses stdout exclusively; all diagnostics go to stderr.
//!
//! Configuration, all via environment:
//! - `MCP_ICONS_PATH` - explicit tabler-icons `icons.json`; otherwise the
//!   well-known paths are scanned
//! - `MCP_ACTOR` - username attributed to stock mutations
//! - `GOOGLE_API_KEY` / `GOOGLE_CSE_ID` - enables the image search tool
//! - `RUST_LOG` - standard env_logger filter
//!
//! ```bash
//! RUST_LOG=info MCP_ACTOR=jane cargo run --bin inventory-mcp-stdio
//! ```

use log::warn;

use inventory_mcp::{
    AuthenticatedUser, IconRegistry, ImageSearchClient, ImageSearchConfig, InMemoryInventory,
    InventoryMcpServer,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    eprintln!("Starting Inventory MCP stdio server");

    let icons = match std::env::var("MCP_ICONS_PATH") {
        Ok(path) if !path.is_empty() => match IconRegistry::from_file(&path) {
            Ok(registry) => registry,
            Err(e) => {
                warn!("Failed to load icons from {path}: {e} - icon validation disabled");
                IconRegistry::empty()
            }
        },
        _ => IconRegistry::discover(),
    };

    let mut builder =
        InventoryMcpServer::builder(InMemoryInventory::new()).icon_registry(icons);
    if let Some(config) = ImageSearchConfig::from_env() {
        match ImageSearchClient::new(config) {
            Ok(client) => builder = builder.image_search(client),
            Err(e) => warn!("Image search disabled: {e}"),
        }
    }
    let server = builder.build();

    let actor = std::env::var("MCP_ACTOR")
        .ok()
        .filter(|name| !name.is_empty())
        .map(AuthenticatedUser::new);
    if let Some(actor) = &actor {
        eprintln!("Stock mutations attributed to '{}'", actor.username);
    }

    eprintln!(
        "{} tools registered, listening for JSON-RPC on stdin",
        server.tool_schemas().len()
    );

    server.run_stdio(actor).await?;

    eprintln!("Inventory MCP server shutdown complete");
    Ok(())
}
