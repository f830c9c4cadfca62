//! Filter tests
//!
//! Covers period/search composition and the pass-through rules:
//! - Filters commute (both are pointwise predicates on independent fields)
//! - No active restriction means no rows are dropped
//! - Unparsable dates are excluded only while a restriction is active

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use reporting::filter::{filter_by_period, filter_by_search, PeriodFilter, SearchFilter};
use reporting::record::RawRecord;

// ============================================================================
// Unit Tests
// ============================================================================

fn supply(code: &str, supplier: &str, date: Value) -> RawRecord {
    json!({
        "supply_code": code,
        "supplier_name": supplier,
        "supply_date": date,
    })
    .as_object()
    .unwrap()
    .clone()
}

#[test]
fn test_empty_input() {
    let period = PeriodFilter::new(Some(8), Some(2025));
    assert!(filter_by_period(&[], "supply_date", &period).is_empty());

    let search = SearchFilter::new("hillside", vec!["supplier_name".into()], vec![]);
    assert!(filter_by_search(&[], &search).is_empty());
}

#[test]
fn test_month_only_restriction_spans_years() {
    let records = vec![
        supply("a", "Hillside", json!("2024-09-01")),
        supply("b", "Hillside", json!("2025-09-15")),
        supply("c", "Hillside", json!("2025-10-15")),
    ];
    let period = PeriodFilter::new(Some(8), None);
    let out = filter_by_period(&records, "supply_date", &period);
    assert_eq!(out.len(), 2);
}

#[test]
fn test_year_only_restriction() {
    let records = vec![
        supply("a", "Hillside", json!("2024-09-01")),
        supply("b", "Hillside", json!("2025-01-15")),
    ];
    let period = PeriodFilter::new(None, Some(2025));
    let out = filter_by_period(&records, "supply_date", &period);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0]["supply_code"], "b");
}

#[test]
fn test_missing_date_field_follows_restriction() {
    let records = vec![
        supply("dated", "Hillside", json!("2025-09-01")),
        supply("undated", "Hillside", json!(null)),
    ];

    let active = PeriodFilter::new(None, Some(2025));
    assert_eq!(filter_by_period(&records, "supply_date", &active).len(), 1);

    let inactive = PeriodFilter::default();
    assert_eq!(filter_by_period(&records, "supply_date", &inactive).len(), 2);
}

#[test]
fn test_search_matches_any_configured_field() {
    let records = vec![
        supply("SUP-2025-00001", "Hillside Estate", json!("2025-09-01")),
        supply("SUP-2025-00002", "Valley Green", json!("2025-09-02")),
    ];
    let search = SearchFilter::new(
        "valley",
        vec!["supply_code".into(), "supplier_name".into()],
        vec![],
    );
    let out = filter_by_search(&records, &search);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0]["supply_code"], "SUP-2025-00002");
}

// ============================================================================
// Property Tests
// ============================================================================

fn arb_record() -> impl Strategy<Value = RawRecord> {
    let date = prop_oneof![
        (2023i32..2027, 1u32..13, 1u32..29)
            .prop_map(|(y, m, d)| json!(format!("{y:04}-{m:02}-{d:02}"))),
        Just(json!("not a date")),
        Just(json!(null)),
    ];
    let name = prop_oneof![
        Just("Hillside Estate"),
        Just("Valley Green"),
        Just("Misty Peak"),
    ];
    let phone = prop_oneof![Just(json!("071-234-5678")), Just(json!("077-888-9999")), Just(json!(null))];
    (date, name, phone).prop_map(|(date, name, phone)| {
        let mut record = Map::new();
        record.insert("supply_date".to_string(), date);
        record.insert("supplier_name".to_string(), json!(name));
        record.insert("phone".to_string(), phone);
        record
    })
}

fn arb_period() -> impl Strategy<Value = PeriodFilter> {
    (
        prop_oneof![Just(None), (0u32..12).prop_map(Some)],
        prop_oneof![Just(None), (2023i32..2027).prop_map(Some)],
    )
        .prop_map(|(month, year)| PeriodFilter::new(month, year))
}

fn arb_query() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("valley".to_string()),
        Just("HILL".to_string()),
        Just("712345".to_string()),
        Just("zzz".to_string()),
    ]
}

proptest! {
    /// Applying the period and search filters in either order yields the
    /// same records
    #[test]
    fn prop_filters_commute(
        records in prop::collection::vec(arb_record(), 0..25),
        period in arb_period(),
        query in arb_query(),
    ) {
        let search = SearchFilter::new(
            query,
            vec!["supplier_name".into()],
            vec!["phone".into()],
        );

        let period_then_search =
            filter_by_search(&filter_by_period(&records, "supply_date", &period), &search);
        let search_then_period =
            filter_by_period(&filter_by_search(&records, &search), "supply_date", &period);
        prop_assert_eq!(period_then_search, search_then_period);
    }

    /// Filtering never invents records and an unrestricted filter drops
    /// nothing
    #[test]
    fn prop_period_filter_is_a_subset(
        records in prop::collection::vec(arb_record(), 0..25),
        period in arb_period(),
    ) {
        let out = filter_by_period(&records, "supply_date", &period);
        prop_assert!(out.len() <= records.len());
        prop_assert!(out.iter().all(|r| records.contains(r)));

        let unrestricted = filter_by_period(&records, "supply_date", &PeriodFilter::default());
        prop_assert_eq!(unrestricted, records);
    }

    /// Filtering leaves the input untouched
    #[test]
    fn prop_filters_do_not_mutate_input(
        records in prop::collection::vec(arb_record(), 0..25),
        period in arb_period(),
    ) {
        let before = records.clone();
        let _ = filter_by_period(&records, "supply_date", &period);
        let search = SearchFilter::new("valley", vec!["supplier_name".into()], vec![]);
        let _ = filter_by_search(&records, &search);
        prop_assert_eq!(records, before);
    }
}
