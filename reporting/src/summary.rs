//! Grouped and scalar summaries over raw records
//!
//! These back the dashboard cards, report tables, and top-supplier
//! rankings. All of them recompute from the raw record list on every call;
//! none trusts a server-provided statistics payload.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

use crate::record::{number_field, RawRecord};
use crate::status::{PaymentStatusClass, StatusVocabulary};

/// Default number of groups kept by a top-N ranking
pub const DEFAULT_GROUP_LIMIT: usize = 5;

/// One row of a grouped ranking (e.g., one supplier)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub key: String,
    /// Display label, fixed by the first record seen for the key
    pub label: String,
    pub count: u64,
    pub total_value: Decimal,
}

/// Group records by key, sum a value field per group, and keep the top
/// `limit` groups by summed value.
///
/// Ties keep first-encountered order (the sort is stable and groups are
/// created in input order). Empty input yields an empty vector.
pub fn grouped_summary<K, L>(
    records: &[RawRecord],
    key_fn: K,
    label_fn: L,
    value_field: &str,
    limit: usize,
) -> Vec<GroupSummary>
where
    K: Fn(&RawRecord) -> String,
    L: Fn(&RawRecord) -> String,
{
    let mut groups: Vec<GroupSummary> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for record in records {
        let key = key_fn(record);
        let value = number_field(record, value_field);
        match index.get(&key) {
            Some(&i) => {
                groups[i].count += 1;
                groups[i].total_value = groups[i].total_value.saturating_add(value);
            }
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(GroupSummary {
                    label: label_fn(record),
                    key,
                    count: 1,
                    total_value: value,
                });
            }
        }
    }
    // Vec::sort_by is stable, so equal totals keep insertion order
    groups.sort_by(|a, b| b.total_value.cmp(&a.total_value));
    groups.truncate(limit);
    groups
}

/// Totals and derived average for a record list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScalarSummary {
    pub count: u64,
    pub total_quantity: Decimal,
    pub total_value: Decimal,
    /// `total_value / total_quantity`, zero when the denominator is zero
    pub average_unit_value: Decimal,
}

/// Reduce a record list to count, quantity and value totals, and the
/// average value per quantity unit.
pub fn scalar_summary(
    records: &[RawRecord],
    quantity_field: &str,
    value_field: &str,
) -> ScalarSummary {
    let mut summary = ScalarSummary::default();
    for record in records {
        summary.count += 1;
        summary.total_quantity = summary
            .total_quantity
            .saturating_add(number_field(record, quantity_field));
        summary.total_value = summary
            .total_value
            .saturating_add(number_field(record, value_field));
    }
    summary.average_unit_value = ratio(summary.total_value, summary.total_quantity);
    summary
}

/// Paid/pending split for a payment-flavored record list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaymentSummary {
    pub completed_count: u64,
    pub pending_count: u64,
    pub completed_amount: Decimal,
    pub pending_amount: Decimal,
    /// Mean amount across all classified records, zero when there are none
    pub average_payment: Decimal,
}

/// Split a record list by payment status and total the amounts per side.
pub fn payment_summary(
    records: &[RawRecord],
    status_field: &str,
    amount_field: &str,
    vocab: &StatusVocabulary,
) -> PaymentSummary {
    let mut summary = PaymentSummary::default();
    for record in records {
        let amount = number_field(record, amount_field);
        match vocab.classify(record, status_field) {
            PaymentStatusClass::Completed => {
                summary.completed_count += 1;
                summary.completed_amount = summary.completed_amount.saturating_add(amount);
            }
            PaymentStatusClass::Pending => {
                summary.pending_count += 1;
                summary.pending_amount = summary.pending_amount.saturating_add(amount);
            }
        }
    }
    summary.average_payment = ratio(
        summary.completed_amount.saturating_add(summary.pending_amount),
        Decimal::from(summary.completed_count + summary.pending_count),
    );
    summary
}

/// The full statistics block a report page renders: scalar totals plus the
/// payment split, derived from the same record list in one pass over each.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    #[serde(flatten)]
    pub totals: ScalarSummary,
    #[serde(flatten)]
    pub payments: PaymentSummary,
}

/// Compute the combined report summary. The value field doubles as the
/// payment amount field, matching how supply records carry `total_payment`.
pub fn report_summary(
    records: &[RawRecord],
    quantity_field: &str,
    value_field: &str,
    status_field: &str,
    vocab: &StatusVocabulary,
) -> ReportSummary {
    ReportSummary {
        totals: scalar_summary(records, quantity_field, value_field),
        payments: payment_summary(records, status_field, value_field, vocab),
    }
}

// Summaries degrade to zero on any arithmetic the inputs cannot support;
// a division that overflows is as much a data problem as a zero denominator
fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
}
