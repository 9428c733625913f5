//! Part tool schema definitions for MCP integration
//!
//! This module contains JSON schema definitions that enable AI agents to
//! discover and understand the part operations. The schemas define parameter
//! validation and provide structured metadata for tool execution.
//!
//! # Tool Categories
//!
//! **Lifecycle**:
//! - [`create_part_tool`] - Part creation with duplicate-avoidance workflow
//! - [`get_part_tool`] - Part retrieval by ID
//! - [`update_part_tool`] - Partial part modification
//! - [`delete_part_tool`] - Deactivate-then-delete removal
//!
//! **Query**:
//! - [`search_parts_tool`] - Keyword search across the part text fields
//! - [`list_parts_tool`] - Paginated listing with category filter
//!
//! **Images**:
//! - [`set_part_image_tool`] - Attach an image by URL
//! - [`search_part_images_tool`] - External image search for candidates
//!
//! The descriptions deliberately spell out recommended workflows (search
//! before create, list categories before categorizing) because agents follow
//! them verbatim.

use serde_json::{Value, json};

/// Schema definition for the part search tool
pub fn search_parts_tool() -> Value {
    json!({
        "name": "search_parts",
        "description": "Search for parts by keyword. Searches across part name, description, IPN, and keywords. Returns matching parts with details.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "search": {
                    "type": "string",
                    "description": "Search term, matched case-insensitively as a substring"
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

/// Schema definition for the part retrieval tool
pub fn get_part_tool() -> Value {
    json!({
        "name": "get_part",
        "description": "Get detailed information about a specific part by its ID (pk).",
        "inputSchema": {
            "type": "object",
            "properties": {
                "id": {
                    "type": "integer",
                    "description": "The part ID (pk)"
                }
            },
            "required": ["id"]
        }
    })
}

/// Schema definition for the part creation tool
pub fn create_part_tool() -> Value {
    json!({
        "name": "create_part",
        "description": "Create a new part. Always use this workflow: search_parts first to check for duplicates, then list_part_categories (check pathstring fields for nesting) to find the deepest matching category, then create the part with the correct category ID. Set category=0 or omit for uncategorized. image_url is a URL the server downloads the image from.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Part name"
                },
                "description": {
                    "type": "string",
                    "description": "Part description"
                },
                "category": {
                    "type": "integer",
                    "description": "Category ID; 0 or omitted leaves the part uncategorized"
                },
                "IPN": {
                    "type": "string",
                    "description": "Internal part number"
                },
                "keywords": {
                    "type": "string",
                    "description": "Search keywords"
                },
                "units": {
                    "type": "string",
                    "description": "Unit of measure (e.g. 'm', 'kg', 'pcs')"
                },
                "minimum_stock": {
                    "type": "number",
                    "description": "Minimum stock level before the part counts as low"
                },
                "purchaseable": {
                    "type": "boolean",
                    "description": "Part can be purchased from suppliers"
                },
                "component": {
                    "type": "boolean",
                    "description": "Part can be used in assemblies"
                },
                "assembly": {
                    "type": "boolean",
                    "description": "Part is itself assembled from other parts"
                },
                "trackable": {
                    "type": "boolean",
                    "description": "Part instances are tracked by serial number"
                },
                "virtual": {
                    "type": "boolean",
                    "description": "Part is virtual (software, license, etc.)"
                },
                "image_url": {
                    "type": "string",
                    "description": "Image URL to download and attach after creation"
                }
            },
            "required": ["name"]
        }
    })
}

/// Schema definition for the part update tool
pub fn update_part_tool() -> Value {
    json!({
        "name": "update_part",
        "description": "Update an existing part. Only provided fields are changed. Set image_url to a URL and the server downloads the image.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "id": {
                    "type": "integer",
                    "description": "The part ID (pk)"
                },
                "name": {
                    "type": "string",
                    "description": "New part name"
                },
                "description": {
                    "type": "string",
                    "description": "New description"
                },
                "category": {
                    "type": "integer",
                    "description": "New category ID"
                },
                "active": {
                    "type": "boolean",
                    "description": "Whether the part is active"
                },
                "IPN": {
                    "type": "string",
                    "description": "New internal part number"
                },
                "keywords": {
                    "type": "string",
                    "description": "New search keywords"
                },
                "units": {
                    "type": "string",
                    "description": "New unit of measure"
                },
                "minimum_stock": {
                    "type": "number",
                    "description": "New minimum stock level"
                },
                "image_url": {
                    "type": "string",
                    "description": "Image URL to download and attach"
                }
            },
            "required": ["id"]
        }
    })
}

/// Schema definition for the part deletion tool
pub fn delete_part_tool() -> Value {
    json!({
        "name": "delete_part",
        "description": "Delete a part. The part is first deactivated, then deleted. The part must have no stock items before it can be deleted.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "id": {
                    "type": "integer",
                    "description": "The part ID (pk)"
                }
            },
            "required": ["id"]
        }
    })
}

/// Schema definition for the part listing tool
pub fn list_parts_tool() -> Value {
    json!({
        "name": "list_parts",
        "description": "List parts, optionally filtered by category. Set category=0 or omit to list all parts. Supports pagination via limit/offset.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "category": {
                    "type": "integer",
                    "description": "Category ID filter; 0 or omitted lists all parts"
                },
                "limit": {
                    "type": "integer",
                    "description": "Page size (default 50)"
                },
                "offset": {
                    "type": "integer",
                    "description": "Number of parts to skip (default 0)"
                }
            }
        }
    })
}

/// Schema definition for the part image assignment tool
pub fn set_part_image_tool() -> Value {
    json!({
        "name": "set_part_image",
        "description": "Set a part's image by URL. The server downloads the image. Use search_part_images to find image URLs, then pass one here.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "id": {
                    "type": "integer",
                    "description": "The part ID (pk)"
                },
                "image_url": {
                    "type": "string",
                    "description": "URL of the image to attach"
                }
            },
            "required": ["id", "image_url"]
        }
    })
}

/// Schema definition for the external image search tool
pub fn search_part_images_tool() -> Value {
    json!({
        "name": "search_part_images",
        "description": "Search Google Images for part photos. Requires GOOGLE_API_KEY and GOOGLE_CSE_ID. Returns image URLs that can be passed to set_part_image or create_part. Tip: include manufacturer name or 'datasheet' in the query for better results.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Free-text image search query"
                },
                "num": {
                    "type": "integer",
                    "description": "Number of results, 1 to 10 (default 5)"
                }
            },
            "required": ["query"]
        }
    })
}
