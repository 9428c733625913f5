//! MCP tool execution handlers.
//!
//! This module contains all the handler implementations for MCP tool
//! execution, organized by entity kind. Every handler has the same shape: a
//! function item matching [`ToolHandler`](super::registry::ToolHandler) that
//! parses its arguments leniently, talks to the provider, and renders a text
//! payload.
//!
//! Argument parsing follows truthy-field semantics throughout: optional
//! strings count only when non-empty, optional numbers only when nonzero,
//! and optional booleans whenever explicitly present. A missing required
//! argument produces an in-band `{"error": "Missing <key> parameter"}`
//! payload, not a protocol fault.

pub mod categories;
pub mod locations;
pub mod parts;
pub mod stock;

use serde_json::Value;

use crate::serialize::error_json;

/// Required string argument. Absent, non-string, or empty yields the
/// rendered missing-parameter payload.
pub(crate) fn require_str(arguments: &Value, key: &str) -> Result<String, String> {
    arguments
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| error_json(format!("Missing {key} parameter")))
}

/// Required integer argument.
pub(crate) fn require_i64(arguments: &Value, key: &str) -> Result<i64, String> {
    arguments
        .get(key)
        .and_then(Value::as_i64)
        .ok_or_else(|| error_json(format!("Missing {key} parameter")))
}

/// Required numeric argument, accepting integers and floats.
pub(crate) fn require_f64(arguments: &Value, key: &str) -> Result<f64, String> {
    arguments
        .get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| error_json(format!("Missing {key} parameter")))
}

/// Optional string argument; empty counts as absent.
pub(crate) fn opt_str(arguments: &Value, key: &str) -> Option<String> {
    arguments
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Optional integer argument; zero counts as absent.
pub(crate) fn opt_i64(arguments: &Value, key: &str) -> Option<i64> {
    arguments
        .get(key)
        .and_then(Value::as_i64)
        .filter(|v| *v != 0)
}

/// Optional numeric argument; zero counts as absent.
pub(crate) fn opt_f64(arguments: &Value, key: &str) -> Option<f64> {
    arguments
        .get(key)
        .and_then(Value::as_f64)
        .filter(|v| *v != 0.0)
}

/// Optional boolean argument; `false` counts as present.
pub(crate) fn opt_bool(arguments: &Value, key: &str) -> Option<bool> {
    arguments.get(key).and_then(Value::as_bool)
}

/// Integer argument with a default for absent or non-integer values.
pub(crate) fn int_or(arguments: &Value, key: &str, default: i64) -> i64 {
    arguments
        .get(key)
        .and_then(Value::as_i64)
        .unwrap_or(default)
}

/// Stock adjustment record ID: `pk` preferred, zero or absent falls back to
/// `id`, neither yields 0 (which callers skip).
pub(crate) fn adjustment_pk(record: &Value) -> i64 {
    record
        .get("pk")
        .and_then(Value::as_i64)
        .filter(|pk| *pk != 0)
        .or_else(|| record.get("id").and_then(Value::as_i64))
        .unwrap_or(0)
}
