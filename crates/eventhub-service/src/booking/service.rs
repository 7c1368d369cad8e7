//! Booking engine — eligibility, capacity, uniqueness, and the derived
//! notification.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;
use eventhub_database::repositories::{EventRepository, TicketRepository};
use eventhub_entity::notification::NotificationKind;
use eventhub_entity::ticket::Ticket;
use eventhub_realtime::NotificationDispatcher;

use crate::context::RequestContext;

use super::credential::CredentialGenerator;

/// Result of a booking attempt that did not error.
///
/// `AlreadyBooked` is deliberately not an error: holding a ticket already
/// is a benign state the caller surfaces as information, not failure.
#[derive(Debug, Clone)]
pub enum BookingOutcome {
    /// A new ticket was reserved.
    Confirmed(Ticket),
    /// The user already held a ticket for this event; no row was created.
    AlreadyBooked {
        /// The previously booked ticket.
        existing: Ticket,
    },
}

/// Reserves tickets against event capacity and emits booking notifications.
#[derive(Debug, Clone)]
pub struct BookingService {
    /// Event repository.
    event_repo: Arc<EventRepository>,
    /// Ticket repository.
    ticket_repo: Arc<TicketRepository>,
    /// Dispatcher for the derived `ticket_booked` notification.
    dispatcher: Arc<NotificationDispatcher>,
    /// Credential generator.
    credentials: CredentialGenerator,
}

impl BookingService {
    /// Creates a new booking service.
    pub fn new(
        event_repo: Arc<EventRepository>,
        ticket_repo: Arc<TicketRepository>,
        dispatcher: Arc<NotificationDispatcher>,
    ) -> Self {
        Self {
            event_repo,
            ticket_repo,
            dispatcher,
            credentials: CredentialGenerator::new(),
        }
    }

    /// Book one ticket for the signed-in user.
    ///
    /// Checks run in order: session, event existence/published state,
    /// advisory capacity check, then the atomic reserving insert. The
    /// insert is the authoritative guard for both capacity and the
    /// one-ticket-per-user rule; the advisory check only avoids pointless
    /// writes for obviously sold-out events.
    ///
    /// The `ticket_booked` notification is best effort: its failure is
    /// logged and never reverts a successful booking.
    pub async fn book(
        &self,
        session: Option<&RequestContext>,
        event_id: Uuid,
    ) -> AppResult<BookingOutcome> {
        let ctx = session
            .ok_or_else(|| AppError::authentication("Booking a ticket requires signing in"))?;

        let event = self
            .event_repo
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Event {event_id} does not exist")))?;

        if !event.is_published {
            return Err(AppError::validation("Event is not open for booking"));
        }

        let attendees = self.ticket_repo.count_for_event(event_id).await?;
        if !event.has_capacity_for(attendees) {
            return Err(AppError::capacity_exceeded(format!(
                "Event '{}' is sold out",
                event.title
            )));
        }

        let qr_code = self.credentials.generate(event_id, ctx.user_id);

        let ticket = match self
            .ticket_repo
            .reserve(event_id, ctx.user_id, &qr_code, event.price)
            .await
        {
            Ok(ticket) => ticket,
            Err(e) if e.is_conflict() => {
                let existing = self
                    .ticket_repo
                    .find_by_event_and_user(event_id, ctx.user_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::internal("Conflicting ticket vanished during booking")
                    })?;
                return Ok(BookingOutcome::AlreadyBooked { existing });
            }
            Err(e) => return Err(e),
        };

        info!(
            ticket_id = %ticket.id,
            event_id = %event_id,
            user_id = %ctx.user_id,
            "Ticket booked"
        );

        let message = format!(
            "You have successfully booked a ticket for {}",
            event.title
        );
        if let Err(e) = self
            .dispatcher
            .notify(
                ctx.user_id.into(),
                NotificationKind::TicketBooked,
                "Ticket Booked",
                &message,
                Some(event.id),
            )
            .await
        {
            // The booking stands regardless; the user simply misses one
            // notification.
            warn!(
                ticket_id = %ticket.id,
                error = %e,
                "Booking succeeded but notification write failed"
            );
        }

        Ok(BookingOutcome::Confirmed(ticket))
    }
}
