//! Raw record access with null-safe coercion
//!
//! The backend delivers records as JSON objects, and in practice any field
//! may be absent, null, or a number encoded as a string. Accessors here are
//! total: bad shapes coerce to zero or `None` instead of propagating.

use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::str::FromStr;

/// A record as fetched from the backend, fields untrusted
pub type RawRecord = Map<String, Value>;

/// Numeric field lookup; absent or non-numeric values coerce to zero
pub fn number_field(record: &RawRecord, name: &str) -> Decimal {
    record.get(name).map(parse_number).unwrap_or(Decimal::ZERO)
}

/// Coerce a JSON value to a number, zero on any non-numeric shape
pub fn parse_number(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Decimal::from(i)
            } else if let Some(u) = n.as_u64() {
                Decimal::from(u)
            } else {
                n.as_f64()
                    .and_then(Decimal::from_f64_retain)
                    .unwrap_or(Decimal::ZERO)
            }
        }
        Value::String(s) => Decimal::from_str(s.trim()).unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

/// Date field lookup; `None` when absent or unparsable
pub fn date_field(record: &RawRecord, name: &str) -> Option<NaiveDate> {
    record.get(name).and_then(parse_date)
}

/// Parse a calendar date or an RFC 3339 timestamp
/// (the shapes of `supply_date` and `created_at` respectively)
pub fn parse_date(value: &Value) -> Option<NaiveDate> {
    let s = value.as_str()?.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

/// String field lookup; `None` for absent or non-string values
pub fn text_field<'a>(record: &'a RawRecord, name: &str) -> Option<&'a str> {
    record.get(name).and_then(Value::as_str)
}
