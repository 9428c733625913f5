//! Stock tool schema definitions.
//!
//! The batch mutation tools take an `items` array of `{pk, quantity}`
//! records; their descriptions carry worked examples because agents copy
//! the shape directly.

use serde_json::{Value, json};

/// Schema definition for the stock listing tool
pub fn get_stock_tool() -> Value {
    json!({
        "name": "get_stock",
        "description": "List stock items, optionally filtered by part ID and/or location ID. Set part=0 and location=0 to list all stock. Supports pagination via limit/offset.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "part": {
                    "type": "integer",
                    "description": "Part ID filter; 0 or omitted lists stock for all parts"
                },
                "location": {
                    "type": "integer",
                    "description": "Location ID filter; 0 or omitted lists stock in all locations"
                },
                "limit": {
                    "type": "integer",
                    "description": "Page size (default 50)"
                },
                "offset": {
                    "type": "integer",
                    "description": "Number of items to skip (default 0)"
                }
            }
        }
    })
}

/// Schema definition for the stock item retrieval tool
pub fn get_stock_item_tool() -> Value {
    json!({
        "name": "get_stock_item",
        "description": "Get detailed information about a specific stock item by its ID (pk).",
        "inputSchema": {
            "type": "object",
            "properties": {
                "id": {
                    "type": "integer",
                    "description": "The stock item ID (pk)"
                }
            },
            "required": ["id"]
        }
    })
}

/// Schema definition for the stock creation tool
pub fn add_stock_tool() -> Value {
    json!({
        "name": "add_stock",
        "description": "Create a new stock item for a part. For trackable parts, provide a serial number. Set location=0 to leave unassigned.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "part": {
                    "type": "integer",
                    "description": "The part ID (pk) to create stock for"
                },
                "quantity": {
                    "type": "number",
                    "description": "Initial quantity"
                },
                "location": {
                    "type": "integer",
                    "description": "Stock location ID; 0 or omitted leaves the item unassigned"
                },
                "batch": {
                    "type": "string",
                    "description": "Batch code"
                },
                "serial": {
                    "type": "string",
                    "description": "Serial number, for trackable parts"
                },
                "notes": {
                    "type": "string",
                    "description": "Free-text notes"
                }
            },
            "required": ["part", "quantity"]
        }
    })
}

/// Schema definition for the batch quantity-add tool
pub fn stock_add_quantity_tool() -> Value {
    json!({
        "name": "stock_add_quantity",
        "description": "Add quantity to existing stock items. Increases stock levels without creating new entries. items: list of objects, each with 'pk' (stock item ID) and 'quantity' (amount to add). Example: [{\"pk\": 1, \"quantity\": 10}, {\"pk\": 2, \"quantity\": 5}]",
        "inputSchema": {
            "type": "object",
            "properties": {
                "items": {
                    "type": "array",
                    "description": "Adjustment records",
                    "items": {
                        "type": "object",
                        "properties": {
                            "pk": {
                                "type": "integer",
                                "description": "Stock item ID"
                            },
                            "quantity": {
                                "type": "number",
                                "description": "Amount to add"
                            }
                        }
                    }
                },
                "notes": {
                    "type": "string",
                    "description": "Notes attached to every adjustment"
                }
            },
            "required": ["items"]
        }
    })
}

/// Schema definition for the batch quantity-remove tool
pub fn stock_remove_quantity_tool() -> Value {
    json!({
        "name": "stock_remove_quantity",
        "description": "Remove quantity from existing stock items. Decreases stock levels. items: list of objects, each with 'pk' (stock item ID) and 'quantity' (amount to remove). Example: [{\"pk\": 1, \"quantity\": 5}]",
        "inputSchema": {
            "type": "object",
            "properties": {
                "items": {
                    "type": "array",
                    "description": "Adjustment records",
                    "items": {
                        "type": "object",
                        "properties": {
                            "pk": {
                                "type": "integer",
                                "description": "Stock item ID"
                            },
                            "quantity": {
                                "type": "number",
                                "description": "Amount to remove"
                            }
                        }
                    }
                },
                "notes": {
                    "type": "string",
                    "description": "Notes attached to every adjustment"
                }
            },
            "required": ["items"]
        }
    })
}

/// Schema definition for the stock transfer tool
pub fn stock_transfer_tool() -> Value {
    json!({
        "name": "stock_transfer",
        "description": "Transfer stock items to a different location. Each item moves in its entirety; per-record quantities are not supported. items: list of objects, each with 'pk' (stock item ID). location: destination stock location ID. Example: items=[{\"pk\": 1}], location=3",
        "inputSchema": {
            "type": "object",
            "properties": {
                "items": {
                    "type": "array",
                    "description": "Items to move; each record needs a 'pk'",
                    "items": {
                        "type": "object",
                        "properties": {
                            "pk": {
                                "type": "integer",
                                "description": "Stock item ID"
                            }
                        }
                    }
                },
                "location": {
                    "type": "integer",
                    "description": "Destination stock location ID"
                },
                "notes": {
                    "type": "string",
                    "description": "Notes attached to every move"
                }
            },
            "required": ["items", "location"]
        }
    })
}

/// Schema definition for the stock item deletion tool
pub fn delete_stock_item_tool() -> Value {
    json!({
        "name": "delete_stock_item",
        "description": "Delete a stock item permanently.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "id": {
                    "type": "integer",
                    "description": "The stock item ID (pk)"
                }
            },
            "required": ["id"]
        }
    })
}
