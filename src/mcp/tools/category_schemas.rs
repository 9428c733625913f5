//! Part category tool schema definitions.
//!
//! Categories are a tree; the schemas steer agents toward the `pathstring`
//! field for understanding nesting instead of walking parents one by one.

use serde_json::{Value, json};

/// Schema definition for the category search tool
pub fn search_part_categories_tool() -> Value {
    json!({
        "name": "search_part_categories",
        "description": "Search for part categories by name. Use the pathstring field to understand the full category hierarchy.",
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

/// Schema definition for the category retrieval tool
pub fn get_part_category_tool() -> Value {
    json!({
        "name": "get_part_category",
        "description": "Get detailed information about a specific part category by its ID (pk).",
        "inputSchema": {
            "type": "object",
            "properties": {
                "id": {
                    "type": "integer",
                    "description": "The category ID (pk)"
                }
            },
            "required": ["id"]
        }
    })
}

/// Schema definition for the category listing tool
pub fn list_part_categories_tool() -> Value {
    json!({
        "name": "list_part_categories",
        "description": "List part categories, optionally filtered by parent. Set parent=0 or omit to list all categories. The pathstring field shows the full hierarchy path (e.g. 'Electronic Components/Resistors/Through Hole'). Supports pagination via limit/offset.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "parent": {
                    "type": "integer",
                    "description": "Parent category ID filter; 0 or omitted lists all categories"
                },
                "limit": {
                    "type": "integer",
                    "description": "Page size (default 100)"
                },
                "offset": {
                    "type": "integer",
                    "description": "Number of categories to skip (default 0)"
                }
            }
        }
    })
}

/// Schema definition for the category creation tool
pub fn create_part_category_tool() -> Value {
    json!({
        "name": "create_part_category",
        "description": "Create a new part category. Always search for existing categories first to avoid duplicates. Categories can be deeply nested; set parent to the parent category ID.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Category name"
                },
                "description": {
                    "type": "string",
                    "description": "Category description"
                },
                "parent": {
                    "type": "integer",
                    "description": "Parent category ID; 0 or omitted creates a root category"
                },
                "default_location": {
                    "type": "integer",
                    "description": "Default stock location ID for parts in this category"
                },
                "structural": {
                    "type": "boolean",
                    "description": "Category is organizational only and cannot directly contain parts"
                }
            },
            "required": ["name"]
        }
    })
}

/// Schema definition for the category update tool
pub fn update_part_category_tool() -> Value {
    json!({
        "name": "update_part_category",
        "description": "Update an existing part category. Only provided fields are changed.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "id": {
                    "type": "integer",
                    "description": "The category ID (pk)"
                },
                "name": {
                    "type": "string",
                    "description": "New category name"
                },
                "description": {
                    "type": "string",
                    "description": "New description"
                },
                "parent": {
                    "type": "integer",
                    "description": "New parent category ID"
                },
                "default_location": {
                    "type": "integer",
                    "description": "New default stock location ID"
                }
            },
            "required": ["id"]
        }
    })
}

/// Schema definition for the category deletion tool
pub fn delete_part_category_tool() -> Value {
    json!({
        "name": "delete_part_category",
        "description": "Delete a part category. Must have no parts or sub-categories.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "id": {
                    "type": "integer",
                    "description": "The category ID (pk)"
                }
            },
            "required": ["id"]
        }
    })
}
