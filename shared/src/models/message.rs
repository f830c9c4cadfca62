//! Messaging and notification models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserRole;

/// A direct message between two users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub sender_role: UserRole,
    pub recipient_id: Uuid,
    pub recipient_role: UserRole,
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// A system notification shown in the notification drawer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub title: String,
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Count of unread notifications, for the badge in the navigation bar
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(read: bool) -> Notification {
        Notification {
            id: Uuid::new_v4(),
            recipient_id: Uuid::new_v4(),
            title: "Payment processed".to_string(),
            body: "Supply SUP-2025-00042 was paid".to_string(),
            read,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_unread_count() {
        let list = vec![notification(false), notification(true), notification(false)];
        assert_eq!(unread_count(&list), 2);
        assert_eq!(unread_count(&[]), 0);
    }
}
