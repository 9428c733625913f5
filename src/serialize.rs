//! Entity projections with a fixed wire shape.
//!
//! Serialized output for a given entity always carries the same key set
//! regardless of which optional fields were absent: missing text becomes `""`,
//! missing numerics become `0`, missing references become `null`, and a
//! missing `in_stock` becomes `true`. That key set is an external
//! compatibility contract shared with earlier servers speaking the same
//! protocol, so it must not drift.
//!
//! The pure `serialize_*` functions take pre-resolved relations; the async
//! `project_*` wrappers resolve aggregates and relations from a provider and
//! degrade failures (counts to 0, part resolution to `null`) instead of
//! propagating them.

use crate::context::RequestContext;
use crate::model::{Part, PartCategory, StockItem, StockLocation};
use crate::provider::InventoryProvider;
use log::debug;
use serde_json::{Value, json};

/// Project a part to its wire shape.
pub fn serialize_part(part: &Part) -> Value {
    let image = match &part.image {
        Some(url) => json!(url),
        None => Value::Null,
    };

    json!({
        "pk": part.pk,
        "name": part.name,
        "description": part.description.as_deref().unwrap_or(""),
        "category": part.category,
        "IPN": part.ipn.as_deref().unwrap_or(""),
        "keywords": part.keywords.as_deref().unwrap_or(""),
        "units": part.units.as_deref().unwrap_or(""),
        "minimum_stock": number_or_zero(part.minimum_stock),
        "purchaseable": part.purchaseable,
        "component": part.component,
        "assembly": part.assembly,
        "trackable": part.trackable,
        "virtual": part.is_virtual,
        "active": part.active,
        "image": image.clone(),
        "thumbnail": image,
    })
}

/// Project a stock item, with its owning part already resolved.
///
/// `part` is `None` when the owning part could not be resolved; the
/// `part_detail` key is then `null`.
pub fn serialize_stock_item(item: &StockItem, part: Option<&Part>) -> Value {
    let part_detail = match part {
        Some(part) => json!({
            "pk": part.pk,
            "name": part.name,
            "full_name": part.full_name(),
        }),
        None => Value::Null,
    };

    let updated = match &item.updated {
        Some(at) => at.to_rfc3339(),
        None => String::new(),
    };

    json!({
        "pk": item.pk,
        "part": item.part,
        "quantity": item.quantity,
        "serial": item.serial.as_deref().unwrap_or(""),
        "batch": item.batch.as_deref().unwrap_or(""),
        "location": item.location,
        "in_stock": item.in_stock.unwrap_or(true),
        "status": item.status,
        "status_text": item.status_label.as_deref().unwrap_or(""),
        "notes": item.notes.as_deref().unwrap_or(""),
        "updated": updated,
        "part_detail": part_detail,
    })
}

/// Project a location, with its aggregates already counted.
pub fn serialize_stock_location(location: &StockLocation, items: u64, sublocations: u64) -> Value {
    json!({
        "pk": location.pk,
        "name": location.name,
        "description": location.description.as_deref().unwrap_or(""),
        "parent": location.parent,
        "pathstring": location.pathstring,
        "level": location.level,
        "structural": location.structural,
        "external": location.external,
        "icon": location.icon.as_deref().unwrap_or(""),
        "items": items,
        "sublocations": sublocations,
    })
}

/// Project a category, with its aggregates already counted.
pub fn serialize_part_category(
    category: &PartCategory,
    part_count: u64,
    subcategories: u64,
) -> Value {
    json!({
        "pk": category.pk,
        "name": category.name,
        "description": category.description.as_deref().unwrap_or(""),
        "parent": category.parent,
        "pathstring": category.pathstring,
        "level": category.level,
        "structural": category.structural,
        "starred": category.starred,
        "icon": category.icon.as_deref().unwrap_or(""),
        "default_location": category.default_location,
        "part_count": part_count,
        "subcategories": subcategories,
    })
}

/// Resolve a stock item's owning part and serialize.
///
/// Resolution failure degrades `part_detail` to `null`.
pub async fn project_stock_item<P: InventoryProvider>(
    provider: &P,
    item: &StockItem,
    context: &RequestContext,
) -> Value {
    let part = match provider.get_part(item.part, context).await {
        Ok(part) => part,
        Err(e) => {
            debug!(
                "Failed to resolve part {} for stock item {}: {}",
                item.part, item.pk, e
            );
            None
        }
    };
    serialize_stock_item(item, part.as_ref())
}

/// Count a location's items and sublocations and serialize.
///
/// Count failures degrade to 0.
pub async fn project_stock_location<P: InventoryProvider>(
    provider: &P,
    location: &StockLocation,
    context: &RequestContext,
) -> Value {
    let items = match provider.count_location_items(location.pk, context).await {
        Ok(count) => count,
        Err(e) => {
            debug!("Failed to count items in location {}: {}", location.pk, e);
            0
        }
    };
    let sublocations = match provider.count_sublocations(location.pk, context).await {
        Ok(count) => count,
        Err(e) => {
            debug!(
                "Failed to count sublocations of location {}: {}",
                location.pk, e
            );
            0
        }
    };
    serialize_stock_location(location, items, sublocations)
}

/// Count a category's parts and subcategories and serialize.
///
/// Count failures degrade to 0.
pub async fn project_part_category<P: InventoryProvider>(
    provider: &P,
    category: &PartCategory,
    context: &RequestContext,
) -> Value {
    let part_count = match provider.count_category_parts(category.pk, context).await {
        Ok(count) => count,
        Err(e) => {
            debug!("Failed to count parts in category {}: {}", category.pk, e);
            0
        }
    };
    let subcategories = match provider.count_subcategories(category.pk, context).await {
        Ok(count) => count,
        Err(e) => {
            debug!(
                "Failed to count subcategories of category {}: {}",
                category.pk, e
            );
            0
        }
    };
    serialize_part_category(category, part_count, subcategories)
}

/// Render a value as indented, deterministic JSON.
///
/// Keys come out sorted (serde_json's default map ordering), so the same
/// value always renders to the same string.
pub fn to_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Render a compact `{"error": "..."}` payload.
///
/// Error payloads are deliberately compact while successful results are
/// indented, matching the established wire contract.
pub fn error_json(message: impl AsRef<str>) -> String {
    json!({"error": message.as_ref()}).to_string()
}

/// Numeric field default: absent or zero renders as integer `0`.
fn number_or_zero(value: Option<f64>) -> Value {
    match value {
        Some(v) if v != 0.0 => json!(v),
        _ => json!(0),
    }
}
