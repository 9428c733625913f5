//! Stock location tool integration tests.
//!
//! The icon flows get their own server fixture with a small loaded registry;
//! everything else runs against the shared empty-registry fixture, which
//! accepts any icon (fail-open).

use crate::common::{call, call_json, seed_location, seed_part, server, try_call};
use inventory_mcp::icons::IconRegistry;
use inventory_mcp::mcp::InventoryMcpServer;
use inventory_mcp::provider::InMemoryInventory;
use serde_json::json;

fn icon_server() -> InventoryMcpServer<InMemoryInventory> {
    let registry = IconRegistry::from_json(json!({
        "package": {"variants": {"outline": {}, "filled": {}}},
        "box": {"variants": {"outline": {}}},
    }))
    .unwrap();
    InventoryMcpServer::builder(InMemoryInventory::new())
        .icon_registry(registry)
        .build()
}

#[tokio::test]
async fn created_location_carries_path_and_aggregates() {
    let server = server();
    let root = seed_location(&server, "Warehouse", None).await;

    let shelf = call_json(
        &server,
        "create_stock_location",
        json!({"name": "Shelf A", "parent": root}),
    )
    .await;

    assert_eq!(shelf["parent"], root);
    assert_eq!(shelf["pathstring"], "Warehouse/Shelf A");
    assert_eq!(shelf["level"], 1);
    assert_eq!(shelf["items"], 0);
    assert_eq!(shelf["sublocations"], 0);
    assert_eq!(shelf["external"], false);
    assert_eq!(shelf["icon"], "");

    let keys = shelf.as_object().unwrap();
    assert_eq!(keys.len(), 11, "location serialization key set drifted");
}

#[tokio::test]
async fn create_location_requires_name() {
    let server = server();
    let payload = call(&server, "create_stock_location", json!({"parent": 1})).await;
    assert_eq!(payload, r#"{"error":"Missing name parameter"}"#);
}

#[tokio::test]
async fn get_location_not_found_is_in_band() {
    let server = server();
    let payload = call(&server, "get_stock_location", json!({"id": 3})).await;
    assert_eq!(payload, r#"{"error":"Stock location 3 not found"}"#);
}

#[tokio::test]
async fn create_accepts_valid_icon_and_rejects_invalid() {
    let server = icon_server();

    let created = call_json(
        &server,
        "create_stock_location",
        json!({"name": "Bin 1", "icon": "ti:package:outline"}),
    )
    .await;
    assert_eq!(created["icon"], "ti:package:outline");

    let rejected = call_json(
        &server,
        "create_stock_location",
        json!({"name": "Bin 2", "icon": "package"}),
    )
    .await;
    assert_eq!(
        rejected["error"],
        "Invalid icon format 'package'. Expected 'ti:<name>:<variant>' (e.g. 'ti:tool:outline')."
    );

    let unknown = call_json(
        &server,
        "create_stock_location",
        json!({"name": "Bin 3", "icon": "ti:packages:outline"}),
    )
    .await;
    let message = unknown["error"].as_str().unwrap();
    assert!(message.starts_with("Unknown Tabler icon 'packages'."), "got {message:?}");
    assert!(message.contains("ti:package:outline"));

    let variant = call_json(
        &server,
        "create_stock_location",
        json!({"name": "Bin 4", "icon": "ti:box:filled"}),
    )
    .await;
    assert_eq!(
        variant["error"],
        "Icon 'box' exists but variant 'filled' is invalid. Valid variants: outline"
    );

    // Nothing was stored for the rejected creates
    let listed = call_json(&server, "list_stock_locations", json!({})).await;
    assert_eq!(listed["count"], 1);
}

#[tokio::test]
async fn icon_none_is_accepted_but_never_stored() {
    let server = icon_server();

    let created = call_json(
        &server,
        "create_stock_location",
        json!({"name": "Bin", "icon": "None"}),
    )
    .await;
    assert_eq!(created["icon"], "");
}

#[tokio::test]
async fn empty_registry_accepts_any_icon() {
    let server = server();

    let created = call_json(
        &server,
        "create_stock_location",
        json!({"name": "Bin", "icon": "ti:made-up:outline"}),
    )
    .await;
    assert_eq!(created["icon"], "ti:made-up:outline");
}

#[tokio::test]
async fn update_icon_is_three_valued() {
    let server = icon_server();
    let pk = seed_location(&server, "Bin", None).await;

    // Set
    let updated = call_json(
        &server,
        "update_stock_location",
        json!({"id": pk, "icon": "ti:package:filled"}),
    )
    .await;
    assert_eq!(updated["icon"], "ti:package:filled");

    // Absent leaves it alone
    let updated = call_json(
        &server,
        "update_stock_location",
        json!({"id": pk, "description": "plastic bin"}),
    )
    .await;
    assert_eq!(updated["icon"], "ti:package:filled");

    // "none" clears it
    let updated = call_json(
        &server,
        "update_stock_location",
        json!({"id": pk, "icon": "none"}),
    )
    .await;
    assert_eq!(updated["icon"], "");

    // Invalid replacement leaves storage untouched
    let rejected = call_json(
        &server,
        "update_stock_location",
        json!({"id": pk, "icon": "ti:nohit-zzz:outline"}),
    )
    .await;
    assert_eq!(rejected["error"], "Unknown Tabler icon 'nohit-zzz'.");
}

#[tokio::test]
async fn reparenting_rebuilds_descendant_paths() {
    let server = server();
    let a = seed_location(&server, "A", None).await;
    let b = seed_location(&server, "B", None).await;
    let child = seed_location(&server, "C", Some(a)).await;
    let grandchild = seed_location(&server, "D", Some(child)).await;

    call_json(
        &server,
        "update_stock_location",
        json!({"id": child, "parent": b}),
    )
    .await;

    let moved = call_json(&server, "get_stock_location", json!({"id": grandchild})).await;
    assert_eq!(moved["pathstring"], "B/C/D");
    assert_eq!(moved["level"], 2);
}

#[tokio::test]
async fn update_location_error_payloads() {
    let server = server();
    let pk = seed_location(&server, "Bin", None).await;

    let payload = call(&server, "update_stock_location", json!({"id": pk})).await;
    assert_eq!(payload, r#"{"error":"No fields provided to update"}"#);

    let payload = call(&server, "update_stock_location", json!({"id": 8, "name": "X"})).await;
    assert_eq!(payload, r#"{"error":"Stock location 8 not found"}"#);
}

#[tokio::test]
async fn delete_location_outcomes_are_plain_text() {
    let server = server();
    let pk = seed_location(&server, "Scratch", None).await;

    let gone = call(&server, "delete_stock_location", json!({"id": pk})).await;
    assert_eq!(gone, format!("Location {pk} deleted successfully."));

    let missing = call(&server, "delete_stock_location", json!({"id": pk})).await;
    assert_eq!(missing, format!("Stock location {pk} not found."));
}

#[tokio::test]
async fn deleting_an_occupied_location_is_a_transport_fault() {
    let server = server();
    let root = seed_location(&server, "Warehouse", None).await;
    seed_location(&server, "Shelf", Some(root)).await;

    let result = try_call(&server, "delete_stock_location", json!({"id": root})).await;
    assert!(result.unwrap_err().to_string().contains("still has sublocations"));

    let bin = seed_location(&server, "Bin", None).await;
    let part = seed_part(&server, "Widget", json!({})).await;
    call_json(
        &server,
        "add_stock",
        json!({"part": part, "location": bin, "quantity": 3}),
    )
    .await;

    let result = try_call(&server, "delete_stock_location", json!({"id": bin})).await;
    assert!(result.unwrap_err().to_string().contains("still has stock items"));
}

#[tokio::test]
async fn location_aggregates_count_items_and_sublocations() {
    let server = server();
    let root = seed_location(&server, "Warehouse", None).await;
    seed_location(&server, "Shelf A", Some(root)).await;
    seed_location(&server, "Shelf B", Some(root)).await;
    let part = seed_part(&server, "Widget", json!({})).await;
    call_json(
        &server,
        "add_stock",
        json!({"part": part, "location": root, "quantity": 2}),
    )
    .await;

    let fetched = call_json(&server, "get_stock_location", json!({"id": root})).await;
    assert_eq!(fetched["items"], 1);
    assert_eq!(fetched["sublocations"], 2);
}
