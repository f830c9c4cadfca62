//! Record filtering: period (month/year) restriction and text/phone search
//!
//! Both filters are pointwise predicates over independent fields, so they
//! compose in either order. Both return fresh vectors and never reorder
//! or mutate their input.

use chrono::Datelike;

use crate::record::{date_field, text_field, RawRecord};
use shared::digits_only;

/// Month/year restriction for a report page
///
/// `month` is the zero-based calendar month (0 = January), matching what
/// the front-end's month picker sends. `None` on either field means no
/// restriction on that component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodFilter {
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl PeriodFilter {
    pub fn new(month: Option<u32>, year: Option<i32>) -> Self {
        Self { month, year }
    }

    /// No restriction on either component
    pub fn is_unrestricted(&self) -> bool {
        self.month.is_none() && self.year.is_none()
    }

    fn matches(&self, date: chrono::NaiveDate) -> bool {
        self.month.map_or(true, |m| date.month0() == m)
            && self.year.map_or(true, |y| date.year() == y)
    }
}

/// Restrict records to those whose `date_field` falls in the period.
///
/// Records with a missing or unparsable date are excluded while any
/// restriction is active, and passed through when the filter is
/// unrestricted (no filter means no rows are dropped).
pub fn filter_by_period(
    records: &[RawRecord],
    date_name: &str,
    period: &PeriodFilter,
) -> Vec<RawRecord> {
    if period.is_unrestricted() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| date_field(r, date_name).is_some_and(|d| period.matches(d)))
        .cloned()
        .collect()
}

/// Case-insensitive substring search over configured fields
///
/// Text fields match on the lower-cased query; phone fields match on the
/// digit-stripped query (skipped when the query has no digits).
#[derive(Debug, Clone)]
pub struct SearchFilter {
    pub query: String,
    pub text_fields: Vec<String>,
    pub phone_fields: Vec<String>,
}

impl SearchFilter {
    pub fn new<S: Into<String>>(
        query: S,
        text_fields: Vec<String>,
        phone_fields: Vec<String>,
    ) -> Self {
        Self {
            query: query.into(),
            text_fields,
            phone_fields,
        }
    }

    fn matches(&self, record: &RawRecord, needle: &str, digit_needle: &str) -> bool {
        let text_hit = self.text_fields.iter().any(|f| {
            text_field(record, f)
                .map(|v| v.to_lowercase().contains(needle))
                .unwrap_or(false)
        });
        if text_hit {
            return true;
        }
        if digit_needle.is_empty() {
            return false;
        }
        self.phone_fields.iter().any(|f| {
            text_field(record, f)
                .map(|v| digits_only(v).contains(digit_needle))
                .unwrap_or(false)
        })
    }
}

/// Apply a search filter; an empty (or all-whitespace) query passes every
/// record through unchanged, order preserved. A non-empty query matches as
/// given: only the emptiness check trims, so surrounding whitespace in the
/// query is significant.
pub fn filter_by_search(records: &[RawRecord], search: &SearchFilter) -> Vec<RawRecord> {
    if search.query.trim().is_empty() {
        return records.to_vec();
    }
    let needle = search.query.to_lowercase();
    let digit_needle = digits_only(&needle);
    records
        .iter()
        .filter(|r| search.matches(r, &needle, &digit_needle))
        .cloned()
        .collect()
}
