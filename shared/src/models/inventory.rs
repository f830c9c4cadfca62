//! Inventory models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stock entry in the factory inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Uuid,
    /// Human-facing inventory code (e.g., "INV-2025-00017")
    pub inventory_code: String,
    pub quantity_kg: Decimal,
    /// Gates the 15-minute edit window, same rule as supply records
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
