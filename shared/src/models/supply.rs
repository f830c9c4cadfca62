//! Supply record models
//!
//! A supply record is one delivery of raw tea leaves from a supplier,
//! with the weighed quantity and the payment computed for it.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One delivery of raw tea leaves from a supplier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplyRecord {
    pub id: Uuid,
    /// Human-facing supply code (e.g., "SUP-2025-00042")
    pub supply_code: String,
    pub supplier_id: Uuid,
    pub supplier_name: String,
    pub quantity_kg: Decimal,
    pub unit_price: Decimal,
    /// Stored independently of quantity × price; the backend computes it
    /// once at creation and it is not recomputed on edit
    pub total_payment: Decimal,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
    pub supply_date: NaiveDate,
    /// Gates the 15-minute edit window
    pub created_at: DateTime<Utc>,
}

/// Settlement status of a supply's payment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Unpaid,
    #[default]
    Pending,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::Pending => "pending",
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, PaymentStatus::Paid)
    }
}

/// How a supply payment is settled
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash settled immediately upon delivery
    Spot,
    /// Settled later via a gateway/batch process
    Monthly,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Spot => "spot",
            PaymentMethod::Monthly => "monthly",
        }
    }
}
