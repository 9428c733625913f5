//! Part tool handlers.
//!
//! This module implements the part lifecycle tools: search, get, create,
//! update, delete, list, plus the two image tools. Create and update accept
//! an optional `image_url` that triggers a best-effort datastore-side image
//! fetch; its failure is logged without failing the call.

use log::warn;
use serde_json::{Value, json};

use super::{int_or, opt_bool, opt_f64, opt_i64, opt_str, require_i64, require_str};
use crate::context::RequestContext;
use crate::error::ToolError;
use crate::mcp::core::InventoryMcpServer;
use crate::mcp::registry::ToolFuture;
use crate::provider::{InventoryProvider, PartCreate, PartUpdate};
use crate::serialize::{error_json, serialize_part, to_json};

/// Search parts across name, description, IPN, and keywords.
///
/// The reported `count` is the number of results returned, after the limit
/// is applied. A non-positive limit falls back to the default of 25.
pub fn search_parts<'a, P: InventoryProvider + Send + Sync + 'static>(
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

        let parts = server
            .provider
            .search_parts(&query, limit as usize, context)
            .await
            .map_err(ToolError::provider)?;

        let results: Vec<Value> = parts.iter().map(serialize_part).collect();
        Ok(to_json(&json!({"count": results.len(), "results": results})))
    })
}

/// Get one part by ID.
pub fn get_part<'a, P: InventoryProvider + Send + Sync + 'static>(
    server: &'a InventoryMcpServer<P>,
    arguments: Value,
    context: &'a RequestContext,
) -> ToolFuture<'a> {
    Box::pin(async move {
        let id = match require_i64(&arguments, "id") {
            Ok(id) => id,
            Err(payload) => return Ok(payload),
        };

        let part = server
            .provider
            .get_part(id, context)
            .await
            .map_err(ToolError::provider)?;

        match part {
            Some(part) => Ok(to_json(&serialize_part(&part))),
            None => Ok(error_json(format!("Part {id} not found"))),
        }
    })
}

/// Create a part from the supplied truthy fields.
///
/// When `image_url` is given, the image fetch runs after creation; a fetch
/// failure is logged and the part is returned as created.
pub fn create_part<'a, P: InventoryProvider + Send + Sync + 'static>(
    server: &'a InventoryMcpServer<P>,
    arguments: Value,
    context: &'a RequestContext,
) -> ToolFuture<'a> {
    Box::pin(async move {
        let name = match require_str(&arguments, "name") {
            Ok(name) => name,
            Err(payload) => return Ok(payload),
        };

        let fields = PartCreate {
            name,
            description: opt_str(&arguments, "description"),
            category: opt_i64(&arguments, "category"),
            ipn: opt_str(&arguments, "IPN"),
            keywords: opt_str(&arguments, "keywords"),
            units: opt_str(&arguments, "units"),
            minimum_stock: opt_f64(&arguments, "minimum_stock"),
            purchaseable: opt_bool(&arguments, "purchaseable"),
            component: opt_bool(&arguments, "component"),
            assembly: opt_bool(&arguments, "assembly"),
            trackable: opt_bool(&arguments, "trackable"),
            is_virtual: opt_bool(&arguments, "virtual"),
        };

        let mut part = server
            .provider
            .create_part(fields, context)
            .await
            .map_err(ToolError::provider)?;

        if let Some(image_url) = opt_str(&arguments, "image_url") {
            match server
                .provider
                .attach_remote_image(part.pk, &image_url, context)
                .await
            {
                Ok(()) => {
                    if let Ok(Some(fresh)) = server.provider.get_part(part.pk, context).await {
                        part = fresh;
                    }
                }
                Err(e) => warn!("Failed to set image for part {}: {}", part.pk, e),
            }
        }

        Ok(to_json(&serialize_part(&part)))
    })
}

/// Update a part's truthy fields, then return the fresh serialization.
///
/// With no fields and no `image_url`, nothing is written and the payload is
/// `{"error": "No fields provided to update"}`.
pub fn update_part<'a, P: InventoryProvider + Send + Sync + 'static>(
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
            .get_part(id, context)
            .await
            .map_err(ToolError::provider)?;
        if existing.is_none() {
            return Ok(error_json(format!("Part {id} not found")));
        }

        let fields = PartUpdate {
            name: opt_str(&arguments, "name"),
            description: opt_str(&arguments, "description"),
            category: opt_i64(&arguments, "category"),
            active: opt_bool(&arguments, "active"),
            ipn: opt_str(&arguments, "IPN"),
            keywords: opt_str(&arguments, "keywords"),
            units: opt_str(&arguments, "units"),
            minimum_stock: opt_f64(&arguments, "minimum_stock"),
        };
        let image_url = opt_str(&arguments, "image_url");

        if fields.is_empty() && image_url.is_none() {
            return Ok(error_json("No fields provided to update"));
        }

        if !fields.is_empty() {
            server
                .provider
                .update_part(id, fields, context)
                .await
                .map_err(ToolError::provider)?;
        }

        if let Some(image_url) = image_url {
            if let Err(e) = server
                .provider
                .attach_remote_image(id, &image_url, context)
                .await
            {
                warn!("Failed to set image for part {id}: {e}");
            }
        }

        let fresh = server
            .provider
            .get_part(id, context)
            .await
            .map_err(ToolError::provider)?
            .ok_or_else(|| ToolError::internal(format!("Part {id} vanished during update")))?;
        Ok(to_json(&serialize_part(&fresh)))
    })
}

/// Delete a part, deactivating it first.
///
/// Returns plain text, not JSON: `"Part <id> not found."` or
/// `"Part <id> deleted successfully."`.
pub fn delete_part<'a, P: InventoryProvider + Send + Sync + 'static>(
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
            .get_part(id, context)
            .await
            .map_err(ToolError::provider)?;
        if existing.is_none() {
            return Ok(format!("Part {id} not found."));
        }

        // Deactivate first; deletion requires an inactive part.
        let deactivate = PartUpdate {
            active: Some(false),
            ..PartUpdate::default()
        };
        server
            .provider
            .update_part(id, deactivate, context)
            .await
            .map_err(ToolError::provider)?;

        server
            .provider
            .delete_part(id, context)
            .await
            .map_err(ToolError::provider)?;
        Ok(format!("Part {id} deleted successfully."))
    })
}

/// List parts with optional category filter and pagination.
///
/// Unlike search, the reported `count` is the total number of matches before
/// pagination.
pub fn list_parts<'a, P: InventoryProvider + Send + Sync + 'static>(
    server: &'a InventoryMcpServer<P>,
    arguments: Value,
    context: &'a RequestContext,
) -> ToolFuture<'a> {
    Box::pin(async move {
        let category = opt_i64(&arguments, "category");
        let limit = int_or(&arguments, "limit", 50).max(0) as usize;
        let offset = int_or(&arguments, "offset", 0).max(0) as usize;

        let (total, parts) = server
            .provider
            .list_parts(category, limit, offset, context)
            .await
            .map_err(ToolError::provider)?;

        let results: Vec<Value> = parts.iter().map(serialize_part).collect();
        Ok(to_json(&json!({"count": total, "results": results})))
    })
}

/// Set a part's image from a URL, returning the fresh serialization.
pub fn set_part_image<'a, P: InventoryProvider + Send + Sync + 'static>(
    server: &'a InventoryMcpServer<P>,
    arguments: Value,
    context: &'a RequestContext,
) -> ToolFuture<'a> {
    Box::pin(async move {
        let id = match require_i64(&arguments, "id") {
            Ok(id) => id,
            Err(payload) => return Ok(payload),
        };
        let image_url = match require_str(&arguments, "image_url") {
            Ok(url) => url,
            Err(payload) => return Ok(payload),
        };

        let existing = server
            .provider
            .get_part(id, context)
            .await
            .map_err(ToolError::provider)?;
        if existing.is_none() {
            return Ok(error_json(format!("Part {id} not found")));
        }

        if let Err(e) = server
            .provider
            .attach_remote_image(id, &image_url, context)
            .await
        {
            return Ok(error_json(format!("Failed to set image: {e}")));
        }

        let fresh = server
            .provider
            .get_part(id, context)
            .await
            .map_err(ToolError::provider)?
            .ok_or_else(|| ToolError::internal(format!("Part {id} vanished during update")))?;
        Ok(to_json(&serialize_part(&fresh)))
    })
}

/// Search the external image API for part photos.
///
/// Without configured credentials the handler reports the missing
/// configuration in-band and makes no network call.
pub fn search_part_images<'a, P: InventoryProvider + Send + Sync + 'static>(
    server: &'a InventoryMcpServer<P>,
    arguments: Value,
    _context: &'a RequestContext,
) -> ToolFuture<'a> {
    Box::pin(async move {
        let query = match require_str(&arguments, "query") {
            Ok(query) => query,
            Err(payload) => return Ok(payload),
        };
        let num = int_or(&arguments, "num", 5).clamp(1, 10) as u8;

        let Some(client) = server.image_search.as_ref() else {
            return Ok(error_json(
                "Image search is not configured. Set GOOGLE_API_KEY and GOOGLE_CSE_ID.",
            ));
        };

        match client.search(&query, num).await {
            Ok(results) => Ok(to_json(&json!({
                "query": query,
                "count": results.len(),
                "results": results,
            }))),
            Err(e) => Ok(error_json(format!("Image search failed: {e}"))),
        }
    })
}
