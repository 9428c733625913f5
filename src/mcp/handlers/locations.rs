//! Stock location tool handlers.
//!
//! Locations mirror categories (tree, pathstring, aggregates) with one
//! extra concern: an optional display icon, validated against the server's
//! icon registry before anything touches storage. The literal `none` clears
//! the icon on update and is never stored.

use serde_json::{Value, json};

use super::{int_or, opt_bool, opt_i64, opt_str, require_i64, require_str};
use crate::context::RequestContext;
use crate::error::ToolError;
use crate::mcp::core::InventoryMcpServer;
use crate::mcp::registry::ToolFuture;
use crate::provider::{InventoryProvider, LocationCreate, LocationUpdate};
use crate::serialize::{error_json, project_stock_location, to_json};

/// Search locations by name or description.
pub fn search_stock_locations<'a, P: InventoryProvider + Send + Sync + 'static>(
    server: &'a InventoryMcpServer<P>,
    arguments: Value,
    context: &'a RequestContext,
) -> ToolFuture<'a> {
    Box::pin(async move {
        let query = match require_str(&arguments, "search") {
            Ok(query) => query,
            Err(payload) => return Ok(payload),
        };
        let mut limit = int_or(&arguments, "limit", 25);
        if limit <= 0 {
            limit = 25;
        }

        let locations = server
            .provider
            .search_locations(&query, limit as usize, context)
            .await
            .map_err(ToolError::provider)?;

        let mut results = Vec::with_capacity(locations.len());
        for location in &locations {
            results.push(project_stock_location(&server.provider, location, context).await);
        }
        Ok(to_json(&json!({"count": results.len(), "results": results})))
    })
}

/// Get one location by ID.
pub fn get_stock_location<'a, P: InventoryProvider + Send + Sync + 'static>(
    server: &'a InventoryMcpServer<P>,
    arguments: Value,
    context: &'a RequestContext,
) -> ToolFuture<'a> {
    Box::pin(async move {
        let id = match require_i64(&arguments, "id") {
            Ok(id) => id,
            Err(payload) => return Ok(payload),
        };

        let location = server
            .provider
            .get_location(id, context)
            .await
            .map_err(ToolError::provider)?;

        match location {
            Some(location) => {
                let record = project_stock_location(&server.provider, &location, context).await;
                Ok(to_json(&record))
            }
            None => Ok(error_json(format!("Stock location {id} not found"))),
        }
    })
}

/// List locations with optional parent filter and pagination.
pub fn list_stock_locations<'a, P: InventoryProvider + Send + Sync + 'static>(
    server: &'a InventoryMcpServer<P>,
    arguments: Value,
    context: &'a RequestContext,
) -> ToolFuture<'a> {
    Box::pin(async move {
        let parent = opt_i64(&arguments, "parent");
        let limit = int_or(&arguments, "limit", 100).max(0) as usize;
        let offset = int_or(&arguments, "offset", 0).max(0) as usize;

        let (total, locations) = server
            .provider
            .list_locations(parent, limit, offset, context)
            .await
            .map_err(ToolError::provider)?;

        let mut results = Vec::with_capacity(locations.len());
        for location in &locations {
            results.push(project_stock_location(&server.provider, location, context).await);
        }
        Ok(to_json(&json!({"count": total, "results": results})))
    })
}

/// Create a location from the supplied truthy fields.
///
/// An invalid `icon` aborts before storage with the validator's message as
/// the error payload.
pub fn create_stock_location<'a, P: InventoryProvider + Send + Sync + 'static>(
    server: &'a InventoryMcpServer<P>,
    arguments: Value,
    context: &'a RequestContext,
) -> ToolFuture<'a> {
    Box::pin(async move {
        let name = match require_str(&arguments, "name") {
            Ok(name) => name,
            Err(payload) => return Ok(payload),
        };

        let icon_arg = opt_str(&arguments, "icon");
        if let Some(icon) = &icon_arg {
            if let Err(message) = server.icons.validate(icon) {
                return Ok(error_json(message));
            }
        }

        let fields = LocationCreate {
            name,
            description: opt_str(&arguments, "description"),
            parent: opt_i64(&arguments, "parent"),
            structural: opt_bool(&arguments, "structural"),
            icon: icon_arg.filter(|icon| !icon.eq_ignore_ascii_case("none")),
        };

        let location = server
            .provider
            .create_location(fields, context)
            .await
            .map_err(ToolError::provider)?;

        let record = project_stock_location(&server.provider, &location, context).await;
        Ok(to_json(&record))
    })
}

/// Update a location's truthy fields.
///
/// The icon argument is three-valued: absent leaves the icon alone, `none`
/// clears it, anything else must validate and replaces it.
pub fn update_stock_location<'a, P: InventoryProvider + Send + Sync + 'static>(
    server: &'a InventoryMcpServer<P>,
    arguments: Value,
    context: &'a RequestContext,
) -> ToolFuture<'a> {
    Box::pin(async move {
        let id = match require_i64(&arguments, "id") {
            Ok(id) => id,
            Err(payload) => return Ok(payload),
        };

        let existing = server
            .provider
            .get_location(id, context)
            .await
            .map_err(ToolError::provider)?;
        if existing.is_none() {
            return Ok(error_json(format!("Stock location {id} not found")));
        }

        let icon = match opt_str(&arguments, "icon") {
            Some(icon) => {
                if let Err(message) = server.icons.validate(&icon) {
                    return Ok(error_json(message));
                }
                if icon.eq_ignore_ascii_case("none") {
                    Some(None)
                } else {
                    Some(Some(icon))
                }
            }
            None => None,
        };

        let fields = LocationUpdate {
            name: opt_str(&arguments, "name"),
            description: opt_str(&arguments, "description"),
            parent: opt_i64(&arguments, "parent"),
            icon,
        };

        if fields.is_empty() {
            return Ok(error_json("No fields provided to update"));
        }

        let fresh = server
            .provider
            .update_location(id, fields, context)
            .await
            .map_err(ToolError::provider)?;

        let record = project_stock_location(&server.provider, &fresh, context).await;
        Ok(to_json(&record))
    })
}

/// Delete a location. Plain-text outcome; the location must be empty.
pub fn delete_stock_location<'a, P: InventoryProvider + Send + Sync + 'static>(
    server: &'a InventoryMcpServer<P>,
    arguments: Value,
    context: &'a RequestContext,
) -> ToolFuture<'a> {
    Box::pin(async move {
        let id = match require_i64(&arguments, "id") {
            Ok(id) => id,
            Err(payload) => return Ok(payload),
        };

        let existing = server
            .provider
            .get_location(id, context)
            .await
            .map_err(ToolError::provider)?;
        if existing.is_none() {
            return Ok(format!("Stock location {id} not found."));
        }

        server
            .provider
            .delete_location(id, context)
            .await
            .map_err(ToolError::provider)?;
        Ok(format!("Location {id} deleted successfully."))
    })
}
