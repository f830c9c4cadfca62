//! User and role models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user account on the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: Option<String>,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Roles with distinct dashboards and permissions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    ProductionManager,
    Staff,
    Supplier,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::ProductionManager => "production_manager",
            UserRole::Staff => "staff",
            UserRole::Supplier => "supplier",
        }
    }

    /// Whether this role may export reports
    pub fn can_export_reports(&self) -> bool {
        matches!(
            self,
            UserRole::Admin | UserRole::ProductionManager | UserRole::Staff
        )
    }

    /// Whether this role may record new supplies
    pub fn can_record_supplies(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Staff)
    }
}
