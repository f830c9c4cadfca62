//! Payment status classification
//!
//! The backend's status vocabulary is inconsistent ("paid", "completed",
//! "unpaid", "pending", or nothing at all), and the original dashboards
//! re-derived the paid/pending split differently per page. Classification
//! lives here, once, with the accepted synonym set configurable.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::RawRecord;

/// Binary settlement classification used by every payment summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatusClass {
    Completed,
    Pending,
}

impl PaymentStatusClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatusClass::Completed => "completed",
            PaymentStatusClass::Pending => "pending",
        }
    }
}

/// The set of status strings that count as "completed"
///
/// Matching is case-insensitive after trimming. Anything outside the set,
/// including an absent or non-string field, classifies as pending.
#[derive(Debug, Clone)]
pub struct StatusVocabulary {
    completed: Vec<String>,
}

impl Default for StatusVocabulary {
    fn default() -> Self {
        Self::new(["paid", "completed"])
    }
}

impl StatusVocabulary {
    pub fn new<I, S>(completed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            completed: completed
                .into_iter()
                .map(|s| s.into().trim().to_lowercase())
                .collect(),
        }
    }

    /// Classify a raw status value
    pub fn classify_value(&self, value: Option<&Value>) -> PaymentStatusClass {
        let normalized = value
            .and_then(Value::as_str)
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_default();
        if self.completed.iter().any(|c| *c == normalized) {
            PaymentStatusClass::Completed
        } else {
            PaymentStatusClass::Pending
        }
    }

    /// Classify the named status field of a record
    pub fn classify(&self, record: &RawRecord, status_field: &str) -> PaymentStatusClass {
        self.classify_value(record.get(status_field))
    }
}
