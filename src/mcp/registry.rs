//! Tool registry: the table of everything `tools/list` advertises.
//!
//! Each tool pairs a discovery schema with a handler function. Handlers are
//! plain function items (not closures) so registration stays a cheap pointer
//! copy and the registry can be rebuilt for any provider type.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use log::warn;
use serde_json::Value;

use super::core::InventoryMcpServer;
use super::handlers::{categories, locations, parts, stock};
use super::tools::{category_schemas, location_schemas, part_schemas, stock_schemas};
use crate::context::RequestContext;
use crate::error::ToolError;
use crate::provider::InventoryProvider;

/// Boxed future produced by a tool handler.
///
/// The lifetime ties the future to the server and context borrows it holds.
pub type ToolFuture<'a> = Pin<Box<dyn Future<Output = Result<String, ToolError>> + Send + 'a>>;

/// Handler function for a single tool.
///
/// Takes the server, the raw `arguments` object from `tools/call`, and the
/// per-request context. Returns the rendered text payload, or a transport
/// fault. Domain failures ("Part 7 not found") are rendered into the payload
/// itself, not surfaced as errors.
pub type ToolHandler<P> =
    for<'a> fn(&'a InventoryMcpServer<P>, Value, &'a RequestContext) -> ToolFuture<'a>;

/// A registered tool: discovery schema plus execution handler.
pub struct ToolDescriptor<P: InventoryProvider> {
    /// Tool name, duplicated out of the schema for cheap lookup.
    pub name: String,
    /// The `tools/list` entry (`name`, `description`, `inputSchema`).
    pub schema: Value,
    /// The function dispatched on `tools/call`.
    pub handler: ToolHandler<P>,
}

/// Ordered tool table with name lookup.
///
/// Registration order is advertisement order: `tools/list` reports tools in
/// the order they were registered.
pub struct ToolRegistry<P: InventoryProvider> {
    tools: Vec<ToolDescriptor<P>>,
    index: HashMap<String, usize>,
}

impl<P: InventoryProvider> ToolRegistry<P> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a tool from its discovery schema.
    ///
    /// The name is read from the schema's `name` field. A schema without a
    /// name is ignored with a warning. Re-registering a name replaces the
    /// previous entry in place, keeping its advertisement position.
    pub fn register(&mut self, schema: Value, handler: ToolHandler<P>) {
        let name = schema
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        if name.is_empty() {
            warn!("Ignoring tool registration without a name");
            return;
        }

        let descriptor = ToolDescriptor {
            name: name.clone(),
            schema,
            handler,
        };
        if let Some(&slot) = self.index.get(&name) {
            warn!("Replacing existing tool registration for '{name}'");
            self.tools[slot] = descriptor;
        } else {
            self.index.insert(name, self.tools.len());
            self.tools.push(descriptor);
        }
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&ToolDescriptor<P>> {
        self.index.get(name).map(|&slot| &self.tools[slot])
    }

    /// Discovery schemas in registration order.
    pub fn schemas(&self) -> Vec<Value> {
        self.tools.iter().map(|tool| tool.schema.clone()).collect()
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|tool| tool.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl<P: InventoryProvider> Default for ToolRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the standard registry: all twenty-seven inventory tools.
pub fn standard_registry<P: InventoryProvider + Send + Sync + 'static>() -> ToolRegistry<P> {
    let mut registry = ToolRegistry::new();

    // Parts
    registry.register(part_schemas::search_parts_tool(), parts::search_parts::<P>);
    registry.register(part_schemas::get_part_tool(), parts::get_part::<P>);
    registry.register(part_schemas::create_part_tool(), parts::create_part::<P>);
    registry.register(part_schemas::update_part_tool(), parts::update_part::<P>);
    registry.register(part_schemas::delete_part_tool(), parts::delete_part::<P>);
    registry.register(part_schemas::list_parts_tool(), parts::list_parts::<P>);
    registry.register(
        part_schemas::set_part_image_tool(),
        parts::set_part_image::<P>,
    );
    registry.register(
        part_schemas::search_part_images_tool(),
        parts::search_part_images::<P>,
    );

    // Part categories
    registry.register(
        category_schemas::search_part_categories_tool(),
        categories::search_part_categories::<P>,
    );
    registry.register(
        category_schemas::get_part_category_tool(),
        categories::get_part_category::<P>,
    );
    registry.register(
        category_schemas::list_part_categories_tool(),
        categories::list_part_categories::<P>,
    );
    registry.register(
        category_schemas::create_part_category_tool(),
        categories::create_part_category::<P>,
    );
    registry.register(
        category_schemas::update_part_category_tool(),
        categories::update_part_category::<P>,
    );
    registry.register(
        category_schemas::delete_part_category_tool(),
        categories::delete_part_category::<P>,
    );

    // Stock locations
    registry.register(
        location_schemas::search_stock_locations_tool(),
        locations::search_stock_locations::<P>,
    );
    registry.register(
        location_schemas::get_stock_location_tool(),
        locations::get_stock_location::<P>,
    );
    registry.register(
        location_schemas::list_stock_locations_tool(),
        locations::list_stock_locations::<P>,
    );
    registry.register(
        location_schemas::create_stock_location_tool(),
        locations::create_stock_location::<P>,
    );
    registry.register(
        location_schemas::update_stock_location_tool(),
        locations::update_stock_location::<P>,
    );
    registry.register(
        location_schemas::delete_stock_location_tool(),
        locations::delete_stock_location::<P>,
    );

    // Stock items
    registry.register(stock_schemas::get_stock_tool(), stock::get_stock::<P>);
    registry.register(
        stock_schemas::get_stock_item_tool(),
        stock::get_stock_item::<P>,
    );
    registry.register(stock_schemas::add_stock_tool(), stock::add_stock::<P>);
    registry.register(
        stock_schemas::stock_add_quantity_tool(),
        stock::stock_add_quantity::<P>,
    );
    registry.register(
        stock_schemas::stock_remove_quantity_tool(),
        stock::stock_remove_quantity::<P>,
    );
    registry.register(
        stock_schemas::stock_transfer_tool(),
        stock::stock_transfer::<P>,
    );
    registry.register(
        stock_schemas::delete_stock_item_tool(),
        stock::delete_stock_item::<P>,
    );

    registry
}
