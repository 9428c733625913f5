//! Stock tool integration tests.
//!
//! Covers the item lifecycle, the batch adjustment contract (sequential,
//! abort on first failure, no rollback, silent skip of non-positive
//! records), and actor attribution on the audit trail.

use crate::common::{call, call_json, seed_location, seed_part, seed_stock, server};
use inventory_mcp::model::StockAction;
use inventory_mcp::{AuthenticatedUser, RequestContext};
use serde_json::{Value, json};

#[tokio::test]
async fn add_stock_returns_item_with_part_detail() {
    let server = server();
    let part = seed_part(&server, "Widget", json!({"IPN": "WID-001"})).await;
    let location = seed_location(&server, "Bin", None).await;

    let item = call_json(
        &server,
        "add_stock",
        json!({"part": part, "location": location, "quantity": 25, "batch": "B42"}),
    )
    .await;

    assert_eq!(item["pk"], 1);
    assert_eq!(item["part"], part);
    assert_eq!(item["quantity"], 25.0);
    assert_eq!(item["batch"], "B42");
    assert_eq!(item["location"], location);
    assert_eq!(item["in_stock"], true);
    assert_eq!(item["status"], 10);
    assert_eq!(item["status_text"], "OK");
    assert_eq!(item["part_detail"]["name"], "Widget");
    assert_eq!(item["part_detail"]["full_name"], "WID-001 | Widget");

    let keys = item.as_object().unwrap();
    assert_eq!(keys.len(), 12, "stock item serialization key set drifted");
}

#[tokio::test]
async fn add_stock_requires_part_and_quantity() {
    let server = server();

    let payload = call(&server, "add_stock", json!({"quantity": 5})).await;
    assert_eq!(payload, r#"{"error":"Missing part parameter"}"#);

    let payload = call(&server, "add_stock", json!({"part": 1})).await;
    assert_eq!(payload, r#"{"error":"Missing quantity parameter"}"#);
}

#[tokio::test]
async fn get_stock_filters_by_part_and_location() {
    let server = server();
    let widget = seed_part(&server, "Widget", json!({})).await;
    let gadget = seed_part(&server, "Gadget", json!({})).await;
    let bin_a = seed_location(&server, "Bin A", None).await;
    let bin_b = seed_location(&server, "Bin B", None).await;
    seed_stock(&server, widget, bin_a, 5.0).await;
    seed_stock(&server, widget, bin_b, 7.0).await;
    seed_stock(&server, gadget, bin_a, 1.0).await;

    let by_part = call_json(&server, "get_stock", json!({"part": widget})).await;
    assert_eq!(by_part["count"], 2);

    let narrowed =
        call_json(&server, "get_stock", json!({"part": widget, "location": bin_b})).await;
    assert_eq!(narrowed["count"], 1);
    assert_eq!(narrowed["results"][0]["quantity"], 7.0);

    // Pagination keeps the pre-pagination total
    let page = call_json(&server, "get_stock", json!({"limit": 1, "offset": 1})).await;
    assert_eq!(page["count"], 3);
    assert_eq!(page["results"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn get_stock_item_not_found_is_in_band() {
    let server = server();
    let payload = call(&server, "get_stock_item", json!({"id": 4})).await;
    assert_eq!(payload, r#"{"error":"Stock item 4 not found"}"#);
}

#[tokio::test]
async fn stock_add_quantity_adjusts_each_record() {
    let server = server();
    let part = seed_part(&server, "Widget", json!({})).await;
    let location = seed_location(&server, "Bin", None).await;
    let first = seed_stock(&server, part, location, 10.0).await;
    let second = seed_stock(&server, part, location, 3.0).await;

    let outcome = call(
        &server,
        "stock_add_quantity",
        json!({"items": [
            {"pk": first, "quantity": 5},
            {"id": second, "quantity": 2},
        ]}),
    )
    .await;
    assert_eq!(outcome, "Stock quantity updated successfully.");

    let item = call_json(&server, "get_stock_item", json!({"id": first})).await;
    assert_eq!(item["quantity"], 15.0);
    let item = call_json(&server, "get_stock_item", json!({"id": second})).await;
    assert_eq!(item["quantity"], 5.0);
}

#[tokio::test]
async fn batch_tools_require_items() {
    let server = server();

    for tool in ["stock_add_quantity", "stock_remove_quantity", "stock_transfer"] {
        let payload = call(&server, tool, json!({})).await;
        assert_eq!(payload, r#"{"error":"Missing items parameter"}"#, "tool {tool}");
    }
}

#[tokio::test]
async fn non_positive_records_are_skipped_silently() {
    let server = server();
    let part = seed_part(&server, "Widget", json!({})).await;
    let location = seed_location(&server, "Bin", None).await;
    let item = seed_stock(&server, part, location, 10.0).await;

    let outcome = call(
        &server,
        "stock_add_quantity",
        json!({"items": [
            {"pk": 0, "quantity": 5},
            {"pk": item, "quantity": 0},
            {"pk": item, "quantity": -3},
            {"quantity": 5},
        ]}),
    )
    .await;
    assert_eq!(outcome, "Stock quantity updated successfully.");

    let fresh = call_json(&server, "get_stock_item", json!({"id": item})).await;
    assert_eq!(fresh["quantity"], 10.0);
}

#[tokio::test]
async fn batch_failure_aborts_without_rollback() {
    let server = server();
    let part = seed_part(&server, "Widget", json!({})).await;
    let location = seed_location(&server, "Bin", None).await;
    let first = seed_stock(&server, part, location, 10.0).await;
    let second = seed_stock(&server, part, location, 1.0).await;

    let payload = call_json(
        &server,
        "stock_remove_quantity",
        json!({"items": [
            {"pk": first, "quantity": 4},
            {"pk": second, "quantity": 100},
        ]}),
    )
    .await;
    let message = payload["error"].as_str().unwrap();
    assert!(
        message.starts_with(&format!("Failed to remove stock from item {second}:")),
        "got {message:?}"
    );

    // The first record's removal stands
    let fresh = call_json(&server, "get_stock_item", json!({"id": first})).await;
    assert_eq!(fresh["quantity"], 6.0);
    let untouched = call_json(&server, "get_stock_item", json!({"id": second})).await;
    assert_eq!(untouched["quantity"], 1.0);
}

#[tokio::test]
async fn batch_missing_item_reports_in_band() {
    let server = server();

    let payload = call(
        &server,
        "stock_add_quantity",
        json!({"items": [{"pk": 41, "quantity": 5}]}),
    )
    .await;
    assert_eq!(payload, r#"{"error":"Stock item 41 not found"}"#);
}

#[tokio::test]
async fn stock_transfer_moves_whole_items() {
    let server = server();
    let part = seed_part(&server, "Widget", json!({})).await;
    let source = seed_location(&server, "Source", None).await;
    let target = seed_location(&server, "Target", None).await;
    let first = seed_stock(&server, part, source, 10.0).await;
    let second = seed_stock(&server, part, source, 3.0).await;

    // Record quantities are ignored: moves are whole-item.
    let outcome = call(
        &server,
        "stock_transfer",
        json!({"location": target, "items": [
            {"pk": first, "quantity": 1},
            {"pk": second},
        ]}),
    )
    .await;
    assert_eq!(outcome, "Stock transferred successfully.");

    let moved = call_json(&server, "get_stock_item", json!({"id": first})).await;
    assert_eq!(moved["location"], target);
    assert_eq!(moved["quantity"], 10.0);
    let moved = call_json(&server, "get_stock_item", json!({"id": second})).await;
    assert_eq!(moved["location"], target);
}

#[tokio::test]
async fn stock_transfer_resolves_destination_up_front() {
    let server = server();
    let part = seed_part(&server, "Widget", json!({})).await;
    let source = seed_location(&server, "Source", None).await;
    let item = seed_stock(&server, part, source, 10.0).await;

    let payload = call(
        &server,
        "stock_transfer",
        json!({"location": 99, "items": [{"pk": item}]}),
    )
    .await;
    assert_eq!(payload, r#"{"error":"Location 99 not found"}"#);

    // Nothing moved
    let fresh = call_json(&server, "get_stock_item", json!({"id": item})).await;
    assert_eq!(fresh["location"], source);
}

#[tokio::test]
async fn stock_transfer_requires_location_after_items() {
    let server = server();

    let payload = call(&server, "stock_transfer", json!({"items": []})).await;
    assert_eq!(payload, r#"{"error":"Missing location parameter"}"#);
}

#[tokio::test]
async fn transfer_to_structural_location_reports_in_band() {
    let server = server();
    let part = seed_part(&server, "Widget", json!({})).await;
    let source = seed_location(&server, "Source", None).await;
    let item = seed_stock(&server, part, source, 2.0).await;

    let zone = call_json(
        &server,
        "create_stock_location",
        json!({"name": "Zone", "structural": true}),
    )
    .await;
    let zone_pk = zone["pk"].as_i64().unwrap();

    let payload = call_json(
        &server,
        "stock_transfer",
        json!({"location": zone_pk, "items": [{"pk": item}]}),
    )
    .await;
    let message = payload["error"].as_str().unwrap();
    assert!(
        message.starts_with(&format!("Failed to transfer stock item {item}:")),
        "got {message:?}"
    );
    assert!(message.contains("structural"));
}

#[tokio::test]
async fn delete_stock_item_outcomes_are_plain_text() {
    let server = server();
    let part = seed_part(&server, "Widget", json!({})).await;
    let location = seed_location(&server, "Bin", None).await;
    let item = seed_stock(&server, part, location, 1.0).await;

    let gone = call(&server, "delete_stock_item", json!({"id": item})).await;
    assert_eq!(gone, format!("Stock item {item} deleted successfully."));

    let missing = call(&server, "delete_stock_item", json!({"id": item})).await;
    assert_eq!(missing, format!("Stock item {item} not found."));
}

#[tokio::test]
async fn stock_mutations_attribute_the_authenticated_actor() {
    let server = server();
    let part = seed_part(&server, "Widget", json!({})).await;
    let location = seed_location(&server, "Bin", None).await;
    let item = seed_stock(&server, part, location, 10.0).await;

    let context = RequestContext::authenticated(AuthenticatedUser::new("stockkeeper"));
    server
        .execute_tool(
            "stock_remove_quantity",
            json!({"items": [{"pk": item, "quantity": 4}], "notes": "issued to bench"}),
            &context,
        )
        .await
        .unwrap();

    let history = server.provider().stock_history().await;
    let last = history.last().unwrap();
    assert_eq!(last.action, StockAction::Removed);
    assert_eq!(last.quantity, 4.0);
    assert_eq!(last.user, Some("stockkeeper".to_string()));
    assert_eq!(last.notes, Some("issued to bench".to_string()));

    // Anonymous seeding left no actor
    assert_eq!(history[0].user, None);
}

#[tokio::test]
async fn quantities_accept_fractional_values() {
    let server = server();
    let part = seed_part(&server, "Wire", json!({"units": "m"})).await;
    let location = seed_location(&server, "Spool rack", None).await;
    let item = seed_stock(&server, part, location, 2.5).await;

    call(
        &server,
        "stock_add_quantity",
        json!({"items": [{"pk": item, "quantity": 0.75}]}),
    )
    .await;

    let fresh = call_json(&server, "get_stock_item", json!({"id": item})).await;
    assert_eq!(fresh["quantity"], 3.25);
}

#[tokio::test]
async fn unused_location_value_is_ignored_by_filters() {
    let server = server();
    let part = seed_part(&server, "Widget", json!({})).await;
    let location = seed_location(&server, "Bin", None).await;
    seed_stock(&server, part, location, 5.0).await;

    // Zero-valued filters are treated as absent
    let all = call_json(&server, "get_stock", json!({"part": 0, "location": 0})).await;
    assert_eq!(all["count"], 1);
    assert_eq!(all["results"][0]["part_detail"]["name"], Value::from("Widget"));
}
