//! Property and concurrency tests for the tool layer.
//!
//! The proptest cases drive tools through `tokio_test::block_on` since the
//! proptest harness is synchronous; assertion failures surface as panics,
//! which the harness catches and shrinks.

use proptest::prelude::*;
use serde_json::json;

use crate::common::{call, call_json, seed_location, seed_part, seed_stock, server};

proptest! {
    /// A part fetched right after creation serializes identically to the
    /// creation response, whatever the name and keywords were.
    #[test]
    fn created_parts_round_trip_through_get(
        name in "[A-Za-z][A-Za-z0-9 ]{0,30}",
        keywords in "[a-z ]{0,20}",
    ) {
        tokio_test::block_on(async {
            let server = server();
            let created = call_json(
                &server,
                "create_part",
                json!({"name": name, "keywords": keywords}),
            )
            .await;
            let pk = created["pk"].as_i64().unwrap();

            let fetched = call_json(&server, "get_part", json!({"id": pk})).await;
            assert_eq!(created, fetched);
            assert_eq!(fetched["name"].as_str(), Some(name.as_str()));
        });
    }

    /// Quantities are dyadic (multiples of 0.25) so repeated addition is
    /// exact in f64 and the final quantity can be asserted with equality.
    #[test]
    fn stock_additions_accumulate_exactly(
        quarters in prop::collection::vec(1u32..=400, 1..6),
    ) {
        tokio_test::block_on(async {
            let server = server();
            let part = seed_part(&server, "Accumulator", json!({})).await;
            let location = seed_location(&server, "Bin", None).await;
            let item = seed_stock(&server, part, location, 1.0).await;

            let mut expected = 1.0;
            for q in &quarters {
                let quantity = f64::from(*q) * 0.25;
                expected += quantity;
                let payload = call(
                    &server,
                    "stock_add_quantity",
                    json!({"items": [{"pk": item, "quantity": quantity}]}),
                )
                .await;
                assert_eq!(payload, "Stock quantity updated successfully.");
            }

            let fetched = call_json(&server, "get_stock_item", json!({"id": item})).await;
            assert_eq!(fetched["quantity"].as_f64(), Some(expected));
        });
    }
}

/// Concurrent creates against one server must each get their own pk.
#[tokio::test]
async fn concurrent_part_creation_assigns_distinct_pks() {
    let server = server();

    let creates: Vec<_> = (0..8)
        .map(|i| {
            call_json(
                &server,
                "create_part",
                json!({"name": format!("Concurrent part {i}")}),
            )
        })
        .collect();
    let created = futures::future::join_all(creates).await;

    let mut pks: Vec<i64> = created
        .iter()
        .map(|part| part["pk"].as_i64().unwrap())
        .collect();
    pks.sort_unstable();
    assert_eq!(pks, (1..=8).collect::<Vec<i64>>());
}

/// Interleaved batch adjustments on one item must never lose an update.
#[tokio::test]
async fn concurrent_adjustments_keep_quantities_consistent() {
    let server = server();
    let part = seed_part(&server, "Contended", json!({})).await;
    let location = seed_location(&server, "Shelf", None).await;
    let item = seed_stock(&server, part, location, 100.0).await;

    let adds: Vec<_> = (0..10)
        .map(|_| {
            call(
                &server,
                "stock_add_quantity",
                json!({"items": [{"pk": item, "quantity": 1}]}),
            )
        })
        .collect();
    for outcome in futures::future::join_all(adds).await {
        assert_eq!(outcome, "Stock quantity updated successfully.");
    }

    let fetched = call_json(&server, "get_stock_item", json!({"id": item})).await;
    assert_eq!(fetched["quantity"].as_f64(), Some(110.0));
}
