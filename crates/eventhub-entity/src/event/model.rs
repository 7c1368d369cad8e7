//! Event entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A published (or draft) event that users can book tickets for.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    /// Unique event identifier.
    pub id: Uuid,
    /// The organizer who created the event.
    pub created_by: Uuid,
    /// Event title.
    pub title: String,
    /// Long-form description.
    pub description: Option<String>,
    /// Venue or address.
    pub location: Option<String>,
    /// When the event starts.
    pub start_time: DateTime<Utc>,
    /// When the event ends.
    pub end_time: DateTime<Utc>,
    /// Maximum number of tickets. `None` means unlimited.
    pub capacity: Option<i32>,
    /// Ticket price. Zero means free entry.
    pub price: f64,
    /// Event category label.
    pub category: Option<String>,
    /// Cover image URL.
    pub image_url: Option<String>,
    /// Whether the event is visible and bookable.
    pub is_published: bool,
    /// When the event was created.
    pub created_at: DateTime<Utc>,
    /// When the event was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Returns whether the event still has room for `attendee_count` holders.
    ///
    /// A `None` capacity means unlimited attendance.
    pub fn has_capacity_for(&self, attendee_count: i64) -> bool {
        match self.capacity {
            Some(cap) => attendee_count < i64::from(cap),
            None => true,
        }
    }

    /// Returns whether the event starts strictly after the given instant.
    pub fn starts_after(&self, instant: DateTime<Utc>) -> bool {
        self.start_time > instant
    }
}

/// Input for creating a new event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEvent {
    /// Event title.
    pub title: String,
    /// Long-form description.
    pub description: Option<String>,
    /// Venue or address.
    pub location: Option<String>,
    /// When the event starts.
    pub start_time: DateTime<Utc>,
    /// When the event ends.
    pub end_time: DateTime<Utc>,
    /// Maximum number of tickets. `None` means unlimited.
    pub capacity: Option<i32>,
    /// Ticket price. Zero means free entry.
    pub price: f64,
    /// Event category label.
    pub category: Option<String>,
    /// Cover image URL.
    pub image_url: Option<String>,
}
