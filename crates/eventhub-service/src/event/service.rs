//! Event creation and queries.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;
use eventhub_core::types::pagination::{PageRequest, PageResponse};
use eventhub_database::repositories::EventRepository;
use eventhub_entity::event::{Event, EventCategory, NewEvent};

use crate::context::RequestContext;

/// Organizer-facing event management and the public event read side.
#[derive(Debug, Clone)]
pub struct EventService {
    /// Event repository.
    repo: Arc<EventRepository>,
}

impl EventService {
    /// Creates a new event service.
    pub fn new(repo: Arc<EventRepository>) -> Self {
        Self { repo }
    }

    /// Creates and publishes an event for the signed-in organizer.
    pub async fn create_event(&self, ctx: &RequestContext, event: NewEvent) -> AppResult<Event> {
        validate_new_event(&event)?;

        let created = self.repo.create(ctx.user_id, &event).await?;
        info!(
            event_id = %created.id,
            created_by = %ctx.user_id,
            title = %created.title,
            "Event created"
        );
        Ok(created)
    }

    /// Fetches one event by id.
    pub async fn get_event(&self, event_id: Uuid) -> AppResult<Event> {
        self.repo
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Event {event_id} does not exist")))
    }

    /// Lists published events, soonest first.
    pub async fn list_published(&self, page: &PageRequest) -> AppResult<PageResponse<Event>> {
        self.repo.list_published(page).await
    }

    /// Returns the current number of tickets held for an event.
    pub async fn attendee_count(&self, event_id: Uuid) -> AppResult<i64> {
        self.repo.attendee_count(event_id).await
    }
}

/// Validate organizer input before touching the store.
fn validate_new_event(event: &NewEvent) -> AppResult<()> {
    if event.title.trim().is_empty() {
        return Err(AppError::validation("Event title must not be empty"));
    }
    if event.end_time < event.start_time {
        return Err(AppError::validation("Event must not end before it starts"));
    }
    if let Some(capacity) = event.capacity {
        if capacity <= 0 {
            return Err(AppError::validation("Event capacity must be positive"));
        }
    }
    if event.price < 0.0 {
        return Err(AppError::validation("Event price must not be negative"));
    }
    if let Some(category) = &event.category {
        category
            .parse::<EventCategory>()
            .map_err(|e| AppError::validation(e.to_string()))?;
    }
    Ok(())
}
