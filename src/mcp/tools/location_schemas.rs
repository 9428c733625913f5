//! Stock location tool schema definitions.
//!
//! Locations carry an optional display icon in `ti:<name>:<variant>` form,
//! validated against the server's icon registry before storage.

use serde_json::{Value, json};

/// Schema definition for the location search tool
pub fn search_stock_locations_tool() -> Value {
    json!({
        "name": "search_stock_locations",
        "description": "Search for stock locations by name. Supports partial matching. Example: search for 'green' to find 'Green 1', 'Green 2', etc.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "search": {
                    "type": "string",
                    "description": "Search term, matched case-insensitively against name and description"
                },
                "limit": {
                    "type": "integer",
                    "description": "Maximum number of results to return (default 25)"
                }
            },
            "required": ["search"]
        }
    })
}

/// Schema definition for the location retrieval tool
pub fn get_stock_location_tool() -> Value {
    json!({
        "name": "get_stock_location",
        "description": "Get detailed information about a specific stock location by its ID (pk).",
        "inputSchema": {
            "type": "object",
            "properties": {
                "id": {
                    "type": "integer",
                    "description": "The location ID (pk)"
                }
            },
            "required": ["id"]
        }
    })
}

/// Schema definition for the location listing tool
pub fn list_stock_locations_tool() -> Value {
    json!({
        "name": "list_stock_locations",
        "description": "List stock locations, optionally filtered by parent location. Set parent=0 or omit to list all locations. Use the pathstring field to understand the location hierarchy. Supports pagination via limit/offset.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "parent": {
                    "type": "integer",
                    "description": "Parent location ID filter; 0 or omitted lists all locations"
                },
                "limit": {
                    "type": "integer",
                    "description": "Page size (default 100)"
                },
                "offset": {
                    "type": "integer",
                    "description": "Number of locations to skip (default 0)"
                }
            }
        }
    })
}

/// Schema definition for the location creation tool
pub fn create_stock_location_tool() -> Value {
    json!({
        "name": "create_stock_location",
        "description": "Create a new stock location. Search first to avoid duplicates. Set parent to nest under an existing location. Set structural=true if the location is organizational only (can't store stock directly).",
        "inputSchema": {
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Location name"
                },
                "description": {
                    "type": "string",
                    "description": "Location description"
                },
                "parent": {
                    "type": "integer",
                    "description": "Parent location ID; 0 or omitted creates a root location"
                },
                "structural": {
                    "type": "boolean",
                    "description": "Location is organizational only and cannot directly hold stock"
                },
                "icon": {
                    "type": "string",
                    "description": "Display icon in ti:<name>:<variant> form (e.g. 'ti:package:outline')"
                }
            },
            "required": ["name"]
        }
    })
}

/// Schema definition for the location update tool
pub fn update_stock_location_tool() -> Value {
    json!({
        "name": "update_stock_location",
        "description": "Update an existing stock location. Only provided fields are changed. Set icon to 'none' to clear the icon.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "id": {
                    "type": "integer",
                    "description": "The location ID (pk)"
                },
                "name": {
                    "type": "string",
                    "description": "New location name"
                },
                "description": {
                    "type": "string",
                    "description": "New description"
                },
                "parent": {
                    "type": "integer",
                    "description": "New parent location ID"
                },
                "icon": {
                    "type": "string",
                    "description": "New display icon in ti:<name>:<variant> form, or 'none' to clear"
                }
            },
            "required": ["id"]
        }
    })
}

/// Schema definition for the location deletion tool
pub fn delete_stock_location_tool() -> Value {
    json!({
        "name": "delete_stock_location",
        "description": "Delete a stock location. The location must be empty (no items or sub-locations).",
        "inputSchema": {
            "type": "object",
            "properties": {
                "id": {
                    "type": "integer",
                    "description": "The location ID (pk)"
                }
            },
            "required": ["id"]
        }
    })
}
