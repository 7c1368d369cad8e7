//! Ticket entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single reserved ticket binding one user to one event.
///
/// At most one ticket exists per (event, user) pair; the database enforces
/// this with a unique constraint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ticket {
    /// Unique ticket identifier.
    pub id: Uuid,
    /// The booked event.
    pub event_id: Uuid,
    /// The ticket holder.
    pub user_id: Uuid,
    /// Opaque scannable credential presented for entry.
    pub qr_code: String,
    /// Price recorded at booking time. Does not track later event price edits.
    pub price_paid: f64,
    /// Whether the ticket has been redeemed at the venue.
    pub is_used: bool,
    /// When the ticket was booked.
    pub created_at: DateTime<Utc>,
    /// When the ticket was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A ticket joined with the event it belongs to.
///
/// Event columns are aliased with an `event_` prefix in the join query to
/// avoid colliding with the ticket's own `id`/`created_at` columns.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TicketWithEvent {
    /// Unique ticket identifier.
    pub id: Uuid,
    /// The booked event.
    pub event_id: Uuid,
    /// The ticket holder.
    pub user_id: Uuid,
    /// Opaque scannable credential presented for entry.
    pub qr_code: String,
    /// Price recorded at booking time.
    pub price_paid: f64,
    /// Whether the ticket has been redeemed at the venue.
    pub is_used: bool,
    /// When the ticket was booked.
    pub created_at: DateTime<Utc>,
    /// Title of the joined event.
    pub event_title: String,
    /// Description of the joined event.
    pub event_description: Option<String>,
    /// Location of the joined event.
    pub event_location: Option<String>,
    /// Start time of the joined event.
    pub event_start_time: DateTime<Utc>,
    /// End time of the joined event.
    pub event_end_time: DateTime<Utc>,
    /// Category of the joined event.
    pub event_category: Option<String>,
    /// Cover image URL of the joined event.
    pub event_image_url: Option<String>,
}

impl TicketWithEvent {
    /// Returns whether the ticket's event starts strictly after `instant`.
    pub fn is_upcoming(&self, instant: DateTime<Utc>) -> bool {
        self.event_start_time > instant
    }
}

/// A user's tickets split into upcoming and past buckets.
///
/// The split is recomputed on every query against the evaluation instant;
/// nothing about it is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionedTickets {
    /// Tickets whose event has not started yet.
    pub upcoming: Vec<TicketWithEvent>,
    /// Tickets whose event start time has passed.
    pub past: Vec<TicketWithEvent>,
}

impl PartitionedTickets {
    /// Partition tickets by comparing each event's start time to `instant`.
    ///
    /// Relative ordering within each bucket is preserved from the input.
    pub fn split(tickets: Vec<TicketWithEvent>, instant: DateTime<Utc>) -> Self {
        let (upcoming, past) = tickets
            .into_iter()
            .partition(|ticket| ticket.is_upcoming(instant));
        Self { upcoming, past }
    }
}
