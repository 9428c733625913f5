//! Part tool integration tests.
//!
//! These exercise the full path from tool name and JSON arguments through the
//! handler and in-memory provider to the rendered text payload, asserting on
//! the exact wire contract an MCP client sees.

use crate::common::{call, call_json, seed_category, seed_part, server};
use serde_json::{Value, json};

#[tokio::test]
async fn create_part_returns_full_serialization() {
    let server = server();

    let part = call_json(
        &server,
        "create_part",
        json!({
            "name": "Resistor 10k",
            "description": "Axial quarter watt",
            "IPN": "RES-10K",
            "keywords": "passive smd",
            "units": "pcs",
            "minimum_stock": 50,
            "purchaseable": true,
            "component": true,
        }),
    )
    .await;

    assert_eq!(part["pk"], 1);
    assert_eq!(part["name"], "Resistor 10k");
    assert_eq!(part["IPN"], "RES-10K");
    assert_eq!(part["minimum_stock"], 50.0);
    assert_eq!(part["purchaseable"], true);
    assert_eq!(part["component"], true);
    assert_eq!(part["assembly"], false);
    assert_eq!(part["active"], true);
    assert_eq!(part["image"], Value::Null);
    assert_eq!(part["thumbnail"], Value::Null);

    let keys = part.as_object().unwrap();
    assert_eq!(keys.len(), 16, "part serialization key set drifted");
}

#[tokio::test]
async fn create_part_requires_name() {
    let server = server();
    let payload = call(&server, "create_part", json!({"description": "anonymous"})).await;
    assert_eq!(payload, r#"{"error":"Missing name parameter"}"#);
}

#[tokio::test]
async fn empty_name_is_treated_as_missing() {
    let server = server();
    let payload = call(&server, "create_part", json!({"name": ""})).await;
    assert_eq!(payload, r#"{"error":"Missing name parameter"}"#);
}

#[tokio::test]
async fn get_part_not_found_is_in_band() {
    let server = server();
    let payload = call(&server, "get_part", json!({"id": 99})).await;
    assert_eq!(payload, r#"{"error":"Part 99 not found"}"#);
}

#[tokio::test]
async fn search_count_is_post_truncation() {
    let server = server();
    for i in 0..4 {
        seed_part(&server, &format!("Widget {i}"), json!({})).await;
    }
    seed_part(&server, "Gadget", json!({})).await;

    let result = call_json(&server, "search_parts", json!({"search": "widget", "limit": 2})).await;
    assert_eq!(result["count"], 2);
    assert_eq!(result["results"].as_array().unwrap().len(), 2);

    // Non-positive limit falls back to the default
    let result = call_json(&server, "search_parts", json!({"search": "widget", "limit": 0})).await;
    assert_eq!(result["count"], 4);
}

#[tokio::test]
async fn search_matches_ipn_and_keywords() {
    let server = server();
    seed_part(&server, "Capacitor", json!({"IPN": "CAP-100N", "keywords": "ceramic X7R"})).await;
    seed_part(&server, "Inductor", json!({})).await;

    let by_ipn = call_json(&server, "search_parts", json!({"search": "cap-100"})).await;
    assert_eq!(by_ipn["count"], 1);

    let by_keyword = call_json(&server, "search_parts", json!({"search": "x7r"})).await;
    assert_eq!(by_keyword["count"], 1);
    assert_eq!(by_keyword["results"][0]["name"], "Capacitor");
}

#[tokio::test]
async fn list_count_is_pre_pagination_total() {
    let server = server();
    let category = seed_category(&server, "Passives", None).await;
    for i in 0..5 {
        seed_part(&server, &format!("R{i}"), json!({"category": category})).await;
    }
    seed_part(&server, "Uncategorized", json!({})).await;

    let page = call_json(
        &server,
        "list_parts",
        json!({"category": category, "limit": 2, "offset": 2}),
    )
    .await;
    assert_eq!(page["count"], 5);
    assert_eq!(page["results"].as_array().unwrap().len(), 2);

    let all = call_json(&server, "list_parts", json!({})).await;
    assert_eq!(all["count"], 6);
}

#[tokio::test]
async fn update_part_applies_truthy_fields_only() {
    let server = server();
    let pk = seed_part(&server, "Widget", json!({"keywords": "original"})).await;

    let updated = call_json(
        &server,
        "update_part",
        json!({"id": pk, "name": "Widget Mk2", "keywords": "", "minimum_stock": 0}),
    )
    .await;

    assert_eq!(updated["name"], "Widget Mk2");
    // Empty string and zero are not applied
    assert_eq!(updated["keywords"], "original");
    assert_eq!(updated["minimum_stock"], 0);
}

#[tokio::test]
async fn update_part_with_no_fields_reports_error() {
    let server = server();
    let pk = seed_part(&server, "Widget", json!({})).await;

    let payload = call(&server, "update_part", json!({"id": pk})).await;
    assert_eq!(payload, r#"{"error":"No fields provided to update"}"#);

    let payload = call(&server, "update_part", json!({"id": 42})).await;
    assert_eq!(payload, r#"{"error":"Part 42 not found"}"#);
}

#[tokio::test]
async fn delete_part_outcomes_are_plain_text() {
    let server = server();
    let pk = seed_part(&server, "Obsolete", json!({})).await;

    let gone = call(&server, "delete_part", json!({"id": pk})).await;
    assert_eq!(gone, format!("Part {pk} deleted successfully."));

    let missing = call(&server, "delete_part", json!({"id": pk})).await;
    assert_eq!(missing, format!("Part {pk} not found."));
}

#[tokio::test]
async fn delete_part_deactivates_before_deleting() {
    let server = server();
    let pk = seed_part(&server, "Active part", json!({})).await;

    // An active part would fail a bare provider delete; the tool deactivates
    // first so the call succeeds in one step.
    let outcome = call(&server, "delete_part", json!({"id": pk})).await;
    assert_eq!(outcome, format!("Part {pk} deleted successfully."));

    let payload = call(&server, "get_part", json!({"id": pk})).await;
    assert_eq!(payload, format!(r#"{{"error":"Part {pk} not found"}}"#));
}

#[tokio::test]
async fn set_part_image_updates_image_and_thumbnail() {
    let server = server();
    let pk = seed_part(&server, "Widget", json!({})).await;

    let updated = call_json(
        &server,
        "set_part_image",
        json!({"id": pk, "image_url": "https://example.com/widget.png"}),
    )
    .await;
    assert_eq!(updated["image"], "https://example.com/widget.png");
    assert_eq!(updated["thumbnail"], "https://example.com/widget.png");
}

#[tokio::test]
async fn set_part_image_rejects_bad_urls_in_band() {
    let server = server();
    let pk = seed_part(&server, "Widget", json!({})).await;

    let payload = call_json(
        &server,
        "set_part_image",
        json!({"id": pk, "image_url": "ftp://example.com/widget.png"}),
    )
    .await;
    let message = payload["error"].as_str().unwrap();
    assert!(message.starts_with("Failed to set image:"), "got {message:?}");

    let missing = call(
        &server,
        "set_part_image",
        json!({"id": 77, "image_url": "https://x.test/a.png"}),
    )
    .await;
    assert_eq!(missing, r#"{"error":"Part 77 not found"}"#);
}

#[tokio::test]
async fn create_part_image_failure_does_not_fail_creation() {
    let server = server();

    let part = call_json(
        &server,
        "create_part",
        json!({"name": "Widget", "image_url": "not-a-url"}),
    )
    .await;
    // Part is created; the bad image is logged and dropped.
    assert_eq!(part["name"], "Widget");
    assert_eq!(part["image"], Value::Null);
}

#[tokio::test]
async fn search_part_images_without_config_is_in_band() {
    let server = server();
    let payload = call(&server, "search_part_images", json!({"query": "resistor"})).await;
    assert_eq!(
        payload,
        r#"{"error":"Image search is not configured. Set GOOGLE_API_KEY and GOOGLE_CSE_ID."}"#
    );

    let missing = call(&server, "search_part_images", json!({})).await;
    assert_eq!(missing, r#"{"error":"Missing query parameter"}"#);
}
