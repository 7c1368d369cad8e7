//! EventHub Server — event booking and notification service
//!
//! Main entry point that wires all crates together and runs the service.

use std::sync::Arc;

use tracing;
use tracing_subscriber::{EnvFilter, fmt};

use eventhub_core::config::AppConfig;
use eventhub_core::error::AppError;
use eventhub_realtime::{NotificationDispatcher, NotificationHub};
use eventhub_service::booking::BookingService;
use eventhub_service::event::EventService;
use eventhub_service::notification::NotificationService;
use eventhub_service::ticket::TicketService;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("EVENTHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main service run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting EventHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = eventhub_database::connection::create_pool(&config.database).await?;
    eventhub_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Repositories ─────────────────────────────────────
    let event_repo = Arc::new(eventhub_database::repositories::EventRepository::new(
        db_pool.clone(),
    ));
    let ticket_repo = Arc::new(eventhub_database::repositories::TicketRepository::new(
        db_pool.clone(),
    ));
    let notification_repo = Arc::new(eventhub_database::repositories::NotificationRepository::new(
        db_pool.clone(),
    ));

    // ── Step 3: Realtime hub + dispatcher ────────────────────────
    let hub = Arc::new(NotificationHub::new(config.realtime.channel_buffer_size));
    let dispatcher = Arc::new(NotificationDispatcher::new(
        Arc::clone(&notification_repo),
        Arc::clone(&hub),
    ));

    // ── Step 4: Services ─────────────────────────────────────────
    let _event_service = EventService::new(Arc::clone(&event_repo));
    let _booking_service = BookingService::new(
        Arc::clone(&event_repo),
        Arc::clone(&ticket_repo),
        Arc::clone(&dispatcher),
    );
    let _notification_service = NotificationService::new(Arc::clone(&notification_repo));
    let _ticket_service = TicketService::new(Arc::clone(&ticket_repo));

    tracing::info!(
        feed_capacity = config.realtime.feed_capacity,
        "EventHub ready"
    );

    // ── Step 5: Run until shutdown ───────────────────────────────
    shutdown_signal().await;
    tracing::info!("Shutdown signal received, closing database pool");
    db_pool.close().await;

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
