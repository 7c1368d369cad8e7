//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A notification to be delivered to a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient user.
    pub user_id: Uuid,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// Kind tag that produced this notification.
    pub kind: String,
    /// Opaque reference to the related resource (e.g. an event id).
    pub related_id: Option<Uuid>,
    /// Whether the user has read this notification.
    pub is_read: bool,
    /// When the notification was created. Delivery order is descending
    /// on this column.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Check if the notification has not been read yet.
    pub fn is_unread(&self) -> bool {
        !self.is_read
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_unread() {
        let notification = Notification {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Ticket Booked".to_string(),
            message: "You have successfully booked a ticket".to_string(),
            kind: "ticket_booked".to_string(),
            related_id: Some(Uuid::new_v4()),
            is_read: false,
            created_at: Utc::now(),
        };
        assert!(notification.is_unread());
    }
}
