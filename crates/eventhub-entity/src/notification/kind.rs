//! Notification kind enumeration.

use serde::{Deserialize, Serialize};

/// Kind of domain event that produced a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A ticket was successfully booked.
    TicketBooked,
    /// A reminder that a booked event is approaching.
    EventReminder,
    /// An event the user holds a ticket for was updated.
    EventUpdate,
    /// A direct message from an organizer.
    Message,
}

impl NotificationKind {
    /// Return the kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TicketBooked => "ticket_booked",
            Self::EventReminder => "event_reminder",
            Self::EventUpdate => "event_update",
            Self::Message => "message",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
