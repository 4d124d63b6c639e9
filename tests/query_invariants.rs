//! Query Engine Invariant Tests
//!
//! Properties the readings query engine must uphold:
//! - Result windows never exceed the requested limit
//! - Pages beyond the last are empty responses, not errors
//! - totalPages is 0 exactly when totalItems is 0
//! - Conjunctive filters commute
//! - The engine is idempotent over a stable store
//! - Validation reports exactly the first failure in the fixed order

use std::collections::HashMap;

use fieldsense::query::{QueryError, ReadingFilter, ReadingPage, ReadingQuery, ReadingQueryEngine};
use fieldsense::store::{EntityStore, MemoryStore, Reading, SensorStatus, SensorType};

// =============================================================================
// Helper Functions
// =============================================================================

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn query(pairs: &[(&str, &str)]) -> ReadingQuery {
    ReadingQuery::parse(&params(pairs)).unwrap()
}

fn execute(pairs: &[(&str, &str)], store: &MemoryStore) -> ReadingPage {
    ReadingQueryEngine::execute(&params(pairs), store).unwrap()
}

/// Three sensors (one per type) and 23 readings spread over values and
/// timestamps; readings 1, 4, 7, ... belong to the temperature sensor.
fn populated_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.insert_sensor("Field A".into(), SensorType::Temperature, SensorStatus::Active);
    store.insert_sensor("Field B".into(), SensorType::Humidity, SensorStatus::Active);
    store.insert_sensor("Greenhouse".into(), SensorType::Moisture, SensorStatus::Inactive);

    for i in 0..23u32 {
        let sensor_id = (i % 3) as u64 + 1;
        let timestamp = format!("2025-11-{:02}T{:02}:00:00Z", 1 + i / 24, i % 24)
            .parse()
            .unwrap();
        store.insert_reading(sensor_id, timestamp, 10.0 + i as f64);
    }
    store
}

fn ids(readings: &[Reading]) -> Vec<u64> {
    readings.iter().map(|r| r.id).collect()
}

// =============================================================================
// Window Invariants
// =============================================================================

/// Every page holds at most `limit` readings, and walking all pages
/// reproduces the full filtered set in order.
#[test]
fn test_windows_are_bounded_and_cover_the_set() {
    let store = populated_store();
    let full = execute(&[("limit", "100")], &store);
    assert_eq!(full.total_items, 23);

    let limit = 5;
    let mut collected = Vec::new();
    for page in 1..=full.total_items.div_ceil(limit) {
        let response = execute(
            &[("limit", &limit.to_string()), ("page", &page.to_string())],
            &store,
        );
        assert!(response.results.len() <= limit);
        collected.extend(response.results);
    }

    assert_eq!(ids(&collected), ids(&full.results));
}

#[test]
fn test_page_beyond_last_is_empty_with_no_next() {
    let store = populated_store();
    let response = execute(&[("limit", "10"), ("page", "4")], &store);

    assert!(response.total_items > 0);
    assert!(response.page > response.total_pages);
    assert!(response.results.is_empty());
    assert!(!response.has_next);
    assert!(response.has_prev);
}

#[test]
fn test_total_pages_zero_iff_total_items_zero() {
    let store = populated_store();

    // minValue above every stored value: nothing matches
    let empty = execute(&[("minValue", "1000")], &store);
    assert_eq!(empty.total_items, 0);
    assert_eq!(empty.total_pages, 0);
    assert!(!empty.has_next);

    let nonempty = execute(&[], &store);
    assert!(nonempty.total_items > 0);
    assert!(nonempty.total_pages > 0);
}

// =============================================================================
// Filter Composition
// =============================================================================

/// Applying the predicates one at a time, in any order, lands on the same
/// set as applying them all at once.
#[test]
fn test_conjunctive_filters_commute() {
    let store = populated_store();

    let single_predicates = [
        query(&[("type", "temperature")]),
        query(&[("minValue", "14")]),
        query(&[("maxValue", "28")]),
        query(&[("from", "2025-11-01T03:00:00Z")]),
        query(&[("to", "2025-11-01T20:00:00Z")]),
    ];

    let combined = query(&[
        ("type", "temperature"),
        ("minValue", "14"),
        ("maxValue", "28"),
        ("from", "2025-11-01T03:00:00Z"),
        ("to", "2025-11-01T20:00:00Z"),
    ]);
    let expected = ids(&ReadingFilter::apply(&combined, store.readings(), &store));

    // Forward order
    let mut forward = store.readings();
    for q in &single_predicates {
        forward = ReadingFilter::apply(q, forward, &store);
    }
    assert_eq!(ids(&forward), expected);

    // Reverse order
    let mut reverse = store.readings();
    for q in single_predicates.iter().rev() {
        reverse = ReadingFilter::apply(q, reverse, &store);
    }
    assert_eq!(ids(&reverse), expected);
}

#[test]
fn test_engine_is_idempotent() {
    let store = populated_store();
    let pairs = [("type", "moisture"), ("limit", "3"), ("page", "2")];

    let first = execute(&pairs, &store);
    let second = execute(&pairs, &store);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

// =============================================================================
// Validation Order
// =============================================================================

#[test]
fn test_first_invalid_parameter_wins() {
    let store = populated_store();

    let result = ReadingQueryEngine::execute(&params(&[("page", "0"), ("limit", "500")]), &store);
    assert_eq!(result, Err(QueryError::InvalidPage));

    let result = ReadingQueryEngine::execute(
        &params(&[("limit", "500"), ("minValue", "junk"), ("to", "junk")]),
        &store,
    );
    assert_eq!(result, Err(QueryError::InvalidLimit));
}

// =============================================================================
// Worked Examples
// =============================================================================

#[test]
fn test_seeded_type_filter_first_window() {
    let store = MemoryStore::seeded();
    let response = execute(&[("type", "temperature"), ("limit", "1"), ("page", "1")], &store);

    assert_eq!(response.page, 1);
    assert_eq!(response.page_size, 1);
    assert_eq!(response.total_items, 2);
    assert_eq!(response.total_pages, 2);
    assert!(response.has_next);
    assert!(!response.has_prev);
    assert_eq!(ids(&response.results), vec![1]);
}

#[test]
fn test_seeded_inverted_value_range() {
    let store = MemoryStore::seeded();
    let result = ReadingQueryEngine::execute(
        &params(&[("minValue", "24.0"), ("maxValue", "23.0")]),
        &store,
    );
    assert_eq!(result, Err(QueryError::InvalidRange));
}

#[test]
fn test_seeded_unparseable_page() {
    let store = MemoryStore::seeded();
    let result = ReadingQueryEngine::execute(&params(&[("page", "abc")]), &store);
    assert_eq!(result, Err(QueryError::InvalidPage));
}

#[test]
fn test_seeded_unknown_type() {
    let store = MemoryStore::seeded();
    let result = ReadingQueryEngine::execute(&params(&[("type", "pressure")]), &store);
    assert_eq!(result, Err(QueryError::InvalidType));
}

#[test]
fn test_seeded_page_past_the_end() {
    let store = MemoryStore::seeded();
    let response = execute(&[("page", "5"), ("limit", "10")], &store);

    assert_eq!(response.page, 5);
    assert_eq!(response.page_size, 10);
    assert_eq!(response.total_items, 2);
    assert_eq!(response.total_pages, 1);
    assert!(!response.has_next);
    assert!(response.has_prev);
    assert!(response.results.is_empty());
}
