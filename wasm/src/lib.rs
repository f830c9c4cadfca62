//! WebAssembly module for the Tea Factory Management Platform
//!
//! Provides client-side computation for:
//! - Report filtering (period and search)
//! - Supply/payment summaries and top-supplier rankings
//! - CSV export row building
//! - Edit-window checks for supply and inventory forms

use chrono::{DateTime, Utc};
use wasm_bindgen::prelude::*;

use reporting::export::{project, to_csv, Column};
use reporting::filter::{filter_by_period, filter_by_search, PeriodFilter, SearchFilter};
use reporting::record::RawRecord;
use reporting::status::StatusVocabulary;
use reporting::summary::{grouped_summary, report_summary, DEFAULT_GROUP_LIMIT};
use shared::{is_within_edit_window, unread_count, Notification};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn parse_records(records_json: &str) -> Result<Vec<RawRecord>, JsValue> {
    serde_json::from_str(records_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid records JSON: {}", e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Filter records to a month/year period. `month` is zero-based
/// (0 = January); pass no value for "all" on either component.
#[wasm_bindgen]
pub fn filter_records_by_period(
    records_json: &str,
    date_field: &str,
    month: Option<u32>,
    year: Option<i32>,
) -> Result<String, JsValue> {
    let records = parse_records(records_json)?;
    let filtered = filter_by_period(&records, date_field, &PeriodFilter::new(month, year));
    to_json(&filtered)
}

/// Case-insensitive search across the supply table's text and phone columns
#[wasm_bindgen]
pub fn search_supply_records(records_json: &str, query: &str) -> Result<String, JsValue> {
    let records = parse_records(records_json)?;
    let search = SearchFilter::new(
        query,
        vec![
            "supply_code".to_string(),
            "supplier_name".to_string(),
            "email".to_string(),
            "address".to_string(),
        ],
        vec!["phone".to_string()],
    );
    to_json(&filter_by_search(&records, &search))
}

/// Full statistics block for a supply report page: count, quantity and
/// payment totals, average unit value, and the paid/pending split
#[wasm_bindgen]
pub fn supply_report_summary(records_json: &str) -> Result<String, JsValue> {
    let records = parse_records(records_json)?;
    let summary = report_summary(
        &records,
        "quantity_kg",
        "total_payment",
        "payment_status",
        &StatusVocabulary::default(),
    );
    to_json(&summary)
}

/// Top suppliers ranked by total payment value
#[wasm_bindgen]
pub fn top_suppliers(records_json: &str, limit: Option<usize>) -> Result<String, JsValue> {
    let records = parse_records(records_json)?;
    let groups = grouped_summary(
        &records,
        |r| {
            r.get("supplier_id")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string()
        },
        |r| {
            r.get("supplier_name")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string()
        },
        "total_payment",
        limit.unwrap_or(DEFAULT_GROUP_LIMIT),
    );
    to_json(&groups)
}

/// Build the CSV download for the supply report. The same columns feed the
/// spreadsheet export, so the two formats cannot drift.
#[wasm_bindgen]
pub fn export_supplies_csv(records_json: &str) -> Result<String, JsValue> {
    let records = parse_records(records_json)?;
    let columns = supply_export_columns();
    let table = project(&records, &columns)
        .map_err(|e| JsValue::from_str(&format!("Export error: {}", e)))?;
    to_csv(&table).map_err(|e| JsValue::from_str(&format!("Export error: {}", e)))
}

fn supply_export_columns() -> Vec<Column> {
    vec![
        Column::field("Supply ID", "supply_code"),
        Column::field("Supplier", "supplier_name"),
        Column::field("Quantity (kg)", "quantity_kg"),
        Column::field("Unit Price", "unit_price"),
        Column::field("Total Payment", "total_payment"),
        Column::field("Payment Status", "payment_status"),
        Column::field("Payment Method", "payment_method"),
        Column::field("Supply Date", "supply_date"),
    ]
}

/// Whether a record created at `created_at` (RFC 3339) is still inside its
/// 15-minute edit window at `now` (RFC 3339)
#[wasm_bindgen]
pub fn is_record_editable(created_at: &str, now: &str) -> bool {
    match (
        DateTime::parse_from_rfc3339(created_at),
        DateTime::parse_from_rfc3339(now),
    ) {
        (Ok(created), Ok(now)) => {
            is_within_edit_window(created.with_timezone(&Utc), now.with_timezone(&Utc))
        }
        _ => false,
    }
}

/// Count unread notifications for the navigation badge
#[wasm_bindgen]
pub fn unread_notification_count(notifications_json: &str) -> Result<u32, JsValue> {
    let notifications: Vec<Notification> = serde_json::from_str(notifications_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid notifications JSON: {}", e)))?;
    Ok(unread_count(&notifications) as u32)
}

/// Compute a supply's total payment from quantity and unit price
#[wasm_bindgen]
pub fn calculate_total_payment(quantity_kg: f64, unit_price: f64) -> f64 {
    if quantity_kg <= 0.0 || unit_price <= 0.0 {
        return 0.0;
    }
    quantity_kg * unit_price
}
