//! Shared helpers for database-backed integration tests.
//!
//! These tests need a running PostgreSQL instance and are `#[ignore]`d by
//! default. Point `EVENTHUB_TEST_DATABASE_URL` at a scratch database and
//! run `cargo test -- --ignored` to execute them.

use std::sync::Arc;

use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use eventhub_database::repositories::{EventRepository, NotificationRepository, TicketRepository};
use eventhub_entity::event::{Event, NewEvent};
use eventhub_realtime::{NotificationDispatcher, NotificationHub};
use eventhub_service::RequestContext;
use eventhub_service::booking::BookingService;
use eventhub_service::event::EventService;
use eventhub_service::notification::NotificationService;
use eventhub_service::ticket::TicketService;

/// Everything a test needs, wired the same way the server wires it.
pub struct TestApp {
    pub pool: PgPool,
    pub hub: Arc<NotificationHub>,
    pub notification_repo: Arc<NotificationRepository>,
    pub events: EventService,
    pub bookings: BookingService,
    pub notifications: NotificationService,
    pub tickets: TicketService,
}

impl TestApp {
    pub async fn new() -> Self {
        let url = std::env::var("EVENTHUB_TEST_DATABASE_URL")
            .expect("EVENTHUB_TEST_DATABASE_URL must be set for integration tests");
        let pool = PgPool::connect(&url)
            .await
            .expect("Failed to connect to test database");
        eventhub_database::migration::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let event_repo = Arc::new(EventRepository::new(pool.clone()));
        let ticket_repo = Arc::new(TicketRepository::new(pool.clone()));
        let notification_repo = Arc::new(NotificationRepository::new(pool.clone()));

        let hub = Arc::new(NotificationHub::new(64));
        let dispatcher = Arc::new(NotificationDispatcher::new(
            Arc::clone(&notification_repo),
            Arc::clone(&hub),
        ));

        Self {
            pool,
            hub,
            notification_repo: Arc::clone(&notification_repo),
            events: EventService::new(Arc::clone(&event_repo)),
            bookings: BookingService::new(
                Arc::clone(&event_repo),
                Arc::clone(&ticket_repo),
                dispatcher,
            ),
            notifications: NotificationService::new(notification_repo),
            tickets: TicketService::new(ticket_repo),
        }
    }

    /// Create a context for a fresh random user.
    pub fn new_user(&self) -> RequestContext {
        RequestContext::new(Uuid::new_v4(), Some("test-user".to_string()))
    }

    /// Create a published event starting in a week.
    pub async fn create_event(&self, capacity: Option<i32>, price: f64) -> Event {
        let organizer = self.new_user();
        let now = Utc::now();
        self.events
            .create_event(
                &organizer,
                NewEvent {
                    title: format!("Test Event {}", Uuid::new_v4()),
                    description: Some("integration test event".to_string()),
                    location: Some("Test Hall".to_string()),
                    start_time: now + Duration::days(7),
                    end_time: now + Duration::days(7) + Duration::hours(2),
                    capacity,
                    price,
                    category: Some("other".to_string()),
                    image_url: None,
                },
            )
            .await
            .expect("Failed to create test event")
    }

    /// Create a published event that already started.
    pub async fn create_past_event(&self) -> Event {
        let organizer = self.new_user();
        let now = Utc::now();
        // create_event does not reject a past start, so the normal path
        // works and keeps the row shape identical.
        self.events
            .create_event(
                &organizer,
                NewEvent {
                    title: format!("Past Event {}", Uuid::new_v4()),
                    description: None,
                    location: None,
                    start_time: now - Duration::days(1),
                    end_time: now - Duration::days(1) + Duration::hours(2),
                    capacity: None,
                    price: 0.0,
                    category: None,
                    image_url: None,
                },
            )
            .await
            .expect("Failed to create past test event")
    }
}
