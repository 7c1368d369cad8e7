//! Notification dispatcher — persists a notification, then publishes it.
//!
//! The durable insert always happens first so a subscriber that misses the
//! push (offline, lagged channel) still sees the notification on its next
//! `list` fetch.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use eventhub_core::result::AppResult;
use eventhub_core::types::id::UserId;
use eventhub_database::repositories::NotificationRepository;
use eventhub_entity::notification::{Notification, NotificationKind};

use crate::hub::NotificationHub;

/// Writes notifications to the store and fans them out to live feeds.
#[derive(Debug, Clone)]
pub struct NotificationDispatcher {
    /// Notification repository for persistence.
    repo: Arc<NotificationRepository>,
    /// Hub for push delivery.
    hub: Arc<NotificationHub>,
}

impl NotificationDispatcher {
    /// Create a new dispatcher.
    pub fn new(repo: Arc<NotificationRepository>, hub: Arc<NotificationHub>) -> Self {
        Self { repo, hub }
    }

    /// Persist a notification for `user_id` and publish it to any live feed.
    pub async fn notify(
        &self,
        user_id: UserId,
        kind: NotificationKind,
        title: &str,
        message: &str,
        related_id: Option<Uuid>,
    ) -> AppResult<Notification> {
        let notification = self
            .repo
            .create(user_id.into_uuid(), kind.as_str(), title, message, related_id)
            .await?;

        let delivered = self.hub.publish(&notification);
        debug!(
            notification_id = %notification.id,
            user_id = %user_id,
            kind = %kind,
            delivered,
            "Notification dispatched"
        );

        Ok(notification)
    }
}
