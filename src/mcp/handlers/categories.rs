//! Part category tool handlers.
//!
//! Categories form a tree; serialized records carry the `pathstring` so
//! agents can see the full hierarchy without walking it. The aggregate
//! fields (`part_count`, `subcategories`) come from the provider per record
//! and degrade to 0 when the counts cannot be resolved.

use serde_json::{Value, json};

use super::{int_or, opt_bool, opt_i64, opt_str, require_i64, require_str};
use crate::context::RequestContext;
use crate::error::ToolError;
use crate::mcp::core::InventoryMcpServer;
use crate::mcp::registry::ToolFuture;
use crate::provider::{CategoryCreate, CategoryUpdate, InventoryProvider};
use crate::serialize::{error_json, project_part_category, to_json};

/// Search categories by name or description.
pub fn search_part_categories<'a, P: InventoryProvider + Send + Sync + 'static>(
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

        let categories = server
            .provider
            .search_categories(&query, limit as usize, context)
            .await
            .map_err(ToolError::provider)?;

        let mut results = Vec::with_capacity(categories.len());
        for category in &categories {
            results.push(project_part_category(&server.provider, category, context).await);
        }
        Ok(to_json(&json!({"count": results.len(), "results": results})))
    })
}

/// Get one category by ID.
pub fn get_part_category<'a, P: InventoryProvider + Send + Sync + 'static>(
    server: &'a InventoryMcpServer<P>,
    arguments: Value,
    context: &'a RequestContext,
) -> ToolFuture<'a> {
    Box::pin(async move {
        let id = match require_i64(&arguments, "id") {
            Ok(id) => id,
            Err(payload) => return Ok(payload),
        };

        let category = server
            .provider
            .get_category(id, context)
            .await
            .map_err(ToolError::provider)?;

        match category {
            Some(category) => {
                let record = project_part_category(&server.provider, &category, context).await;
                Ok(to_json(&record))
            }
            None => Ok(error_json(format!("Part category {id} not found"))),
        }
    })
}

/// List categories with optional parent filter and pagination.
pub fn list_part_categories<'a, P: InventoryProvider + Send + Sync + 'static>(
    server: &'a InventoryMcpServer<P>,
    arguments: Value,
    context: &'a RequestContext,
) -> ToolFuture<'a> {
    Box::pin(async move {
        let parent = opt_i64(&arguments, "parent");
        let limit = int_or(&arguments, "limit", 100).max(0) as usize;
        let offset = int_or(&arguments, "offset", 0).max(0) as usize;

        let (total, categories) = server
            .provider
            .list_categories(parent, limit, offset, context)
            .await
            .map_err(ToolError::provider)?;

        let mut results = Vec::with_capacity(categories.len());
        for category in &categories {
            results.push(project_part_category(&server.provider, category, context).await);
        }
        Ok(to_json(&json!({"count": total, "results": results})))
    })
}

/// Create a category from the supplied truthy fields.
pub fn create_part_category<'a, P: InventoryProvider + Send + Sync + 'static>(
    server: &'a InventoryMcpServer<P>,
    arguments: Value,
    context: &'a RequestContext,
) -> ToolFuture<'a> {
    Box::pin(async move {
        let name = match require_str(&arguments, "name") {
            Ok(name) => name,
            Err(payload) => return Ok(payload),
        };

        let fields = CategoryCreate {
            name,
            description: opt_str(&arguments, "description"),
            parent: opt_i64(&arguments, "parent"),
            default_location: opt_i64(&arguments, "default_location"),
            structural: opt_bool(&arguments, "structural"),
        };

        let category = server
            .provider
            .create_category(fields, context)
            .await
            .map_err(ToolError::provider)?;

        let record = project_part_category(&server.provider, &category, context).await;
        Ok(to_json(&record))
    })
}

/// Update a category's truthy fields.
pub fn update_part_category<'a, P: InventoryProvider + Send + Sync + 'static>(
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
            .get_category(id, context)
            .await
            .map_err(ToolError::provider)?;
        if existing.is_none() {
            return Ok(error_json(format!("Part category {id} not found")));
        }

        let fields = CategoryUpdate {
            name: opt_str(&arguments, "name"),
            description: opt_str(&arguments, "description"),
            parent: opt_i64(&arguments, "parent"),
            default_location: opt_i64(&arguments, "default_location"),
        };

        if fields.is_empty() {
            return Ok(error_json("No fields provided to update"));
        }

        let fresh = server
            .provider
            .update_category(id, fields, context)
            .await
            .map_err(ToolError::provider)?;

        let record = project_part_category(&server.provider, &fresh, context).await;
        Ok(to_json(&record))
    })
}

/// Delete a category. Plain-text outcome; the category must be a leaf with
/// no parts.
pub fn delete_part_category<'a, P: InventoryProvider + Send + Sync + 'static>(
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
            .get_category(id, context)
            .await
            .map_err(ToolError::provider)?;
        if existing.is_none() {
            return Ok(format!("Part category {id} not found."));
        }

        server
            .provider
            .delete_category(id, context)
            .await
            .map_err(ToolError::provider)?;
        Ok(format!("Category {id} deleted successfully."))
    })
}
