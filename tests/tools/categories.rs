//! Part category tool integration tests.

use crate::common::{call, call_json, seed_category, seed_part, server, try_call};
use inventory_mcp::ToolError;
use serde_json::{Value, json};

#[tokio::test]
async fn created_category_carries_path_and_aggregates() {
    let server = server();
    let root = seed_category(&server, "Electronics", None).await;

    let child = call_json(
        &server,
        "create_part_category",
        json!({"name": "Passives", "parent": root, "description": "R, L, C"}),
    )
    .await;

    assert_eq!(child["parent"], root);
    assert_eq!(child["pathstring"], "Electronics/Passives");
    assert_eq!(child["level"], 1);
    assert_eq!(child["part_count"], 0);
    assert_eq!(child["subcategories"], 0);
    assert_eq!(child["icon"], "");
    assert_eq!(child["default_location"], Value::Null);

    let keys = child.as_object().unwrap();
    assert_eq!(keys.len(), 12, "category serialization key set drifted");
}

#[tokio::test]
async fn create_category_requires_name() {
    let server = server();
    let payload = call(&server, "create_part_category", json!({})).await;
    assert_eq!(payload, r#"{"error":"Missing name parameter"}"#);
}

#[tokio::test]
async fn aggregates_count_parts_and_subcategories() {
    let server = server();
    let root = seed_category(&server, "Electronics", None).await;
    seed_category(&server, "Passives", Some(root)).await;
    seed_category(&server, "Actives", Some(root)).await;
    seed_part(&server, "Solder", json!({"category": root})).await;

    let fetched = call_json(&server, "get_part_category", json!({"id": root})).await;
    assert_eq!(fetched["part_count"], 1);
    assert_eq!(fetched["subcategories"], 2);
}

#[tokio::test]
async fn get_category_not_found_is_in_band() {
    let server = server();
    let payload = call(&server, "get_part_category", json!({"id": 5})).await;
    assert_eq!(payload, r#"{"error":"Part category 5 not found"}"#);
}

#[tokio::test]
async fn search_and_list_follow_the_count_contract() {
    let server = server();
    let root = seed_category(&server, "Electronics", None).await;
    for name in ["Resistors", "Capacitors", "Inductors"] {
        seed_category(&server, name, Some(root)).await;
    }

    // Search count is post-truncation
    let found =
        call_json(&server, "search_part_categories", json!({"search": "ors", "limit": 2})).await;
    assert_eq!(found["count"], 2);

    // List count is the pre-pagination total for the filter
    let listed = call_json(
        &server,
        "list_part_categories",
        json!({"parent": root, "limit": 1}),
    )
    .await;
    assert_eq!(listed["count"], 3);
    assert_eq!(listed["results"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn renaming_a_category_rebuilds_descendant_paths() {
    let server = server();
    let root = seed_category(&server, "Electronics", None).await;
    let child = seed_category(&server, "Passives", Some(root)).await;

    let renamed = call_json(
        &server,
        "update_part_category",
        json!({"id": root, "name": "Components"}),
    )
    .await;
    assert_eq!(renamed["pathstring"], "Components");

    let fresh = call_json(&server, "get_part_category", json!({"id": child})).await;
    assert_eq!(fresh["pathstring"], "Components/Passives");
}

#[tokio::test]
async fn update_category_error_payloads() {
    let server = server();
    let pk = seed_category(&server, "Electronics", None).await;

    let payload = call(&server, "update_part_category", json!({"id": pk})).await;
    assert_eq!(payload, r#"{"error":"No fields provided to update"}"#);

    let payload = call(&server, "update_part_category", json!({"id": 9, "name": "X"})).await;
    assert_eq!(payload, r#"{"error":"Part category 9 not found"}"#);
}

#[tokio::test]
async fn cyclic_reparenting_is_a_transport_fault() {
    let server = server();
    let root = seed_category(&server, "Electronics", None).await;
    let child = seed_category(&server, "Passives", Some(root)).await;

    let result = try_call(
        &server,
        "update_part_category",
        json!({"id": root, "parent": child}),
    )
    .await;
    let error = result.unwrap_err();
    assert!(matches!(error, ToolError::Provider(_)));
    assert!(error.to_string().contains("descendant"), "got {error}");
}

#[tokio::test]
async fn delete_category_outcomes_are_plain_text() {
    let server = server();
    let pk = seed_category(&server, "Scratch", None).await;

    let gone = call(&server, "delete_part_category", json!({"id": pk})).await;
    assert_eq!(gone, format!("Category {pk} deleted successfully."));

    let missing = call(&server, "delete_part_category", json!({"id": pk})).await;
    assert_eq!(missing, format!("Part category {pk} not found."));
}

#[tokio::test]
async fn deleting_a_populated_category_is_a_transport_fault() {
    let server = server();
    let root = seed_category(&server, "Electronics", None).await;
    seed_category(&server, "Passives", Some(root)).await;

    let result = try_call(&server, "delete_part_category", json!({"id": root})).await;
    let error = result.unwrap_err();
    assert!(error.to_string().contains("still has subcategories"), "got {error}");

    let holder = seed_category(&server, "Mechanical", None).await;
    seed_part(&server, "Bolt", json!({"category": holder})).await;
    let result = try_call(&server, "delete_part_category", json!({"id": holder})).await;
    assert!(result.unwrap_err().to_string().contains("still has parts"));
}
