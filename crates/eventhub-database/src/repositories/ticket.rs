//! Ticket repository implementation.
//!
//! Capacity enforcement lives here: [`TicketRepository::reserve`] locks the
//! event row, re-checks the ticket count, and inserts within one
//! transaction, so two concurrent bookings at the capacity boundary cannot
//! both succeed.

use sqlx::PgPool;
use uuid::Uuid;

use eventhub_core::error::{AppError, ErrorKind};
use eventhub_core::result::AppResult;
use eventhub_entity::ticket::{Ticket, TicketWithEvent};

/// Repository for ticket rows.
#[derive(Debug, Clone)]
pub struct TicketRepository {
    pool: PgPool,
}

impl TicketRepository {
    /// Create a new ticket repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Atomically reserve one ticket against the event's capacity.
    ///
    /// The event row is locked (`FOR UPDATE`) for the duration of the
    /// count-and-insert, which serializes concurrent reservations for the
    /// same event. Errors:
    /// - `NotFound` if the event does not exist,
    /// - `CapacityExceeded` if the count has reached a non-null capacity,
    /// - `Conflict` if the (event, user) unique constraint fires.
    pub async fn reserve(
        &self,
        event_id: Uuid,
        user_id: Uuid,
        qr_code: &str,
        price_paid: f64,
    ) -> AppResult<Ticket> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let capacity: Option<Option<i32>> =
            sqlx::query_scalar("SELECT capacity FROM events WHERE id = $1 FOR UPDATE")
                .bind(event_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to lock event row", e)
                })?;

        let capacity = capacity
            .ok_or_else(|| AppError::not_found(format!("Event {event_id} does not exist")))?;

        if let Some(cap) = capacity {
            let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tickets WHERE event_id = $1")
                .bind(event_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count tickets", e)
                })?;

            if count >= i64::from(cap) {
                // Dropping the transaction rolls back the row lock.
                return Err(AppError::capacity_exceeded(format!(
                    "Event {event_id} is at full capacity ({cap})"
                )));
            }
        }

        let ticket = sqlx::query_as::<_, Ticket>(
            "INSERT INTO tickets (event_id, user_id, qr_code, price_paid) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(event_id)
        .bind(user_id)
        .bind(qr_code)
        .bind(price_paid)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_insert_error)?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit reservation", e)
        })?;

        Ok(ticket)
    }

    /// Find the ticket a user holds for an event, if any.
    pub async fn find_by_event_and_user(
        &self,
        event_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<Ticket>> {
        sqlx::query_as::<_, Ticket>("SELECT * FROM tickets WHERE event_id = $1 AND user_id = $2")
            .bind(event_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find ticket", e))
    }

    /// List a user's tickets joined with their events, newest booking first.
    pub async fn find_with_events_by_user(&self, user_id: Uuid) -> AppResult<Vec<TicketWithEvent>> {
        sqlx::query_as::<_, TicketWithEvent>(
            "SELECT t.id, t.event_id, t.user_id, t.qr_code, t.price_paid, t.is_used, \
             t.created_at, \
             e.title AS event_title, e.description AS event_description, \
             e.location AS event_location, e.start_time AS event_start_time, \
             e.end_time AS event_end_time, e.category AS event_category, \
             e.image_url AS event_image_url \
             FROM tickets t JOIN events e ON e.id = t.event_id \
             WHERE t.user_id = $1 ORDER BY t.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tickets", e))
    }

    /// Count outstanding tickets for an event.
    pub async fn count_for_event(&self, event_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tickets WHERE event_id = $1")
            .bind(event_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count tickets", e))
    }
}

/// Map an insert failure, distinguishing the unique-constraint conflict
/// from other database errors.
fn map_insert_error(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            return AppError::conflict("A ticket already exists for this event and user");
        }
    }
    AppError::with_source(ErrorKind::Database, "Failed to insert ticket", err)
}
