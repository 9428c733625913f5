//! Stock tool handlers.
//!
//! Stock mutations are where an actor matters: every quantity change and
//! move is attributed to the authenticated user on the request context, so
//! the provider can write a usable audit trail.
//!
//! The batch tools (`stock_add_quantity`, `stock_remove_quantity`,
//! `stock_transfer`) process records sequentially in input order and abort
//! on the first failure with no rollback of earlier records. Records without
//! a positive `pk` (or, for the quantity tools, a positive `quantity`) are
//! skipped silently.

use serde_json::{Value, json};

use super::{adjustment_pk, int_or, opt_i64, opt_str, require_f64, require_i64};
use crate::context::RequestContext;
use crate::error::ToolError;
use crate::mcp::core::InventoryMcpServer;
use crate::mcp::registry::ToolFuture;
use crate::provider::{InventoryProvider, StockItemCreate};
use crate::serialize::{error_json, project_stock_item, to_json};

/// List stock items with optional part and location filters.
pub fn get_stock<'a, P: InventoryProvider + Send + Sync + 'static>(
    server: &'a InventoryMcpServer<P>,
    arguments: Value,
    context: &'a RequestContext,
) -> ToolFuture<'a> {
    Box::pin(async move {
        let part = opt_i64(&arguments, "part");
        let location = opt_i64(&arguments, "location");
        let limit = int_or(&arguments, "limit", 50).max(0) as usize;
        let offset = int_or(&arguments, "offset", 0).max(0) as usize;

        let (total, items) = server
            .provider
            .list_stock(part, location, limit, offset, context)
            .await
            .map_err(ToolError::provider)?;

        let mut results = Vec::with_capacity(items.len());
        for item in &items {
            results.push(project_stock_item(&server.provider, item, context).await);
        }
        Ok(to_json(&json!({"count": total, "results": results})))
    })
}

/// Get one stock item by ID.
pub fn get_stock_item<'a, P: InventoryProvider + Send + Sync + 'static>(
    server: &'a InventoryMcpServer<P>,
    arguments: Value,
    context: &'a RequestContext,
) -> ToolFuture<'a> {
    Box::pin(async move {
        let id = match require_i64(&arguments, "id") {
            Ok(id) => id,
            Err(payload) => return Ok(payload),
        };

        let item = server
            .provider
            .get_stock_item(id, context)
            .await
            .map_err(ToolError::provider)?;

        match item {
            Some(item) => {
                let record = project_stock_item(&server.provider, &item, context).await;
                Ok(to_json(&record))
            }
            None => Ok(error_json(format!("Stock item {id} not found"))),
        }
    })
}

/// Create a stock item for a part with an initial quantity.
pub fn add_stock<'a, P: InventoryProvider + Send + Sync + 'static>(
    server: &'a InventoryMcpServer<P>,
    arguments: Value,
    context: &'a RequestContext,
) -> ToolFuture<'a> {
    Box::pin(async move {
        let part = match require_i64(&arguments, "part") {
            Ok(part) => part,
            Err(payload) => return Ok(payload),
        };
        let quantity = match require_f64(&arguments, "quantity") {
            Ok(quantity) => quantity,
            Err(payload) => return Ok(payload),
        };

        let fields = StockItemCreate {
            part,
            quantity,
            location: opt_i64(&arguments, "location"),
            batch: opt_str(&arguments, "batch"),
            serial: opt_str(&arguments, "serial"),
            notes: opt_str(&arguments, "notes"),
        };

        let item = server
            .provider
            .create_stock_item(fields, context)
            .await
            .map_err(ToolError::provider)?;

        let record = project_stock_item(&server.provider, &item, context).await;
        Ok(to_json(&record))
    })
}

/// Add quantity to existing stock items, record by record.
pub fn stock_add_quantity<'a, P: InventoryProvider + Send + Sync + 'static>(
    server: &'a InventoryMcpServer<P>,
    arguments: Value,
    context: &'a RequestContext,
) -> ToolFuture<'a> {
    Box::pin(async move {
        let Some(records) = arguments.get("items").and_then(Value::as_array) else {
            return Ok(error_json("Missing items parameter"));
        };
        let notes = opt_str(&arguments, "notes");

        for record in records {
            let pk = adjustment_pk(record);
            let quantity = record
                .get("quantity")
                .and_then(Value::as_f64)
                .unwrap_or(0.0);
            if pk <= 0 || quantity <= 0.0 {
                continue;
            }

            let existing = server
                .provider
                .get_stock_item(pk, context)
                .await
                .map_err(ToolError::provider)?;
            if existing.is_none() {
                return Ok(error_json(format!("Stock item {pk} not found")));
            }

            if let Err(e) = server
                .provider
                .add_stock(pk, quantity, notes.as_deref(), context)
                .await
            {
                return Ok(error_json(format!("Failed to add stock to item {pk}: {e}")));
            }
        }

        Ok("Stock quantity updated successfully.".to_string())
    })
}

/// Remove quantity from existing stock items, record by record.
pub fn stock_remove_quantity<'a, P: InventoryProvider + Send + Sync + 'static>(
    server: &'a InventoryMcpServer<P>,
    arguments: Value,
    context: &'a RequestContext,
) -> ToolFuture<'a> {
    Box::pin(async move {
        let Some(records) = arguments.get("items").and_then(Value::as_array) else {
            return Ok(error_json("Missing items parameter"));
        };
        let notes = opt_str(&arguments, "notes");

        for record in records {
            let pk = adjustment_pk(record);
            let quantity = record
                .get("quantity")
                .and_then(Value::as_f64)
                .unwrap_or(0.0);
            if pk <= 0 || quantity <= 0.0 {
                continue;
            }

            let existing = server
                .provider
                .get_stock_item(pk, context)
                .await
                .map_err(ToolError::provider)?;
            if existing.is_none() {
                return Ok(error_json(format!("Stock item {pk} not found")));
            }

            if let Err(e) = server
                .provider
                .take_stock(pk, quantity, notes.as_deref(), context)
                .await
            {
                return Ok(error_json(format!(
                    "Failed to remove stock from item {pk}: {e}"
                )));
            }
        }

        Ok("Stock quantity removed successfully.".to_string())
    })
}

/// Move stock items to a destination location.
///
/// The destination is resolved once up front; a missing destination aborts
/// before any item moves. Record quantities are ignored: moves are
/// whole-item.
pub fn stock_transfer<'a, P: InventoryProvider + Send + Sync + 'static>(
    server: &'a InventoryMcpServer<P>,
    arguments: Value,
    context: &'a RequestContext,
) -> ToolFuture<'a> {
    Box::pin(async move {
        let Some(records) = arguments.get("items").and_then(Value::as_array) else {
            return Ok(error_json("Missing items parameter"));
        };
        let location = match require_i64(&arguments, "location") {
            Ok(location) => location,
            Err(payload) => return Ok(payload),
        };
        let notes = opt_str(&arguments, "notes");

        let destination = server
            .provider
            .get_location(location, context)
            .await
            .map_err(ToolError::provider)?;
        if destination.is_none() {
            return Ok(error_json(format!("Location {location} not found")));
        }

        for record in records {
            let pk = adjustment_pk(record);
            if pk <= 0 {
                continue;
            }

            let existing = server
                .provider
                .get_stock_item(pk, context)
                .await
                .map_err(ToolError::provider)?;
            if existing.is_none() {
                return Ok(error_json(format!("Stock item {pk} not found")));
            }

            if let Err(e) = server
                .provider
                .move_stock(pk, location, notes.as_deref(), context)
                .await
            {
                return Ok(error_json(format!(
                    "Failed to transfer stock item {pk}: {e}"
                )));
            }
        }

        Ok("Stock transferred successfully.".to_string())
    })
}

/// Delete a stock item permanently. Plain-text outcome.
pub fn delete_stock_item<'a, P: InventoryProvider + Send + Sync + 'static>(
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
            .get_stock_item(id, context)
            .await
            .map_err(ToolError::provider)?;
        if existing.is_none() {
            return Ok(format!("Stock item {id} not found."));
        }

        server
            .provider
            .delete_stock_item(id, context)
            .await
            .map_err(ToolError::provider)?;
        Ok(format!("Stock item {id} deleted successfully."))
    })
}
