//! Ticket queries for the signed-in user.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use eventhub_core::result::AppResult;
use eventhub_database::repositories::TicketRepository;
use eventhub_entity::ticket::{PartitionedTickets, Ticket};

use crate::context::RequestContext;

/// Read-side queries over a user's tickets.
#[derive(Debug, Clone)]
pub struct TicketService {
    /// Ticket repository.
    repo: Arc<TicketRepository>,
}

impl TicketService {
    /// Creates a new ticket service.
    pub fn new(repo: Arc<TicketRepository>) -> Self {
        Self { repo }
    }

    /// Lists the user's tickets joined with event data, newest booking
    /// first, partitioned into upcoming and past at the query instant.
    ///
    /// The partition is never stored; a ticket migrates between buckets
    /// on its own as its event's start time passes.
    pub async fn list_tickets(&self, ctx: &RequestContext) -> AppResult<PartitionedTickets> {
        let tickets = self.repo.find_with_events_by_user(ctx.user_id).await?;
        Ok(PartitionedTickets::split(tickets, Utc::now()))
    }

    /// Finds the ticket the user holds for an event, if any. Used as the
    /// already-booked pre-check before offering the booking action.
    pub async fn find_ticket(
        &self,
        ctx: &RequestContext,
        event_id: Uuid,
    ) -> AppResult<Option<Ticket>> {
        self.repo.find_by_event_and_user(event_id, ctx.user_id).await
    }
}
