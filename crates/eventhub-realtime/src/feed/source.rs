//! Source of the initial notification fetch made at subscribe time.

use async_trait::async_trait;

use eventhub_core::result::AppResult;
use eventhub_core::types::id::UserId;
use eventhub_database::repositories::NotificationRepository;
use eventhub_entity::notification::Notification;

/// Provides the bounded "most recent notifications" query a feed runs when
/// it first subscribes. Abstracted so feed behavior can be exercised
/// without a database.
#[async_trait]
pub trait NotificationSource: Send + Sync + 'static {
    /// Fetch the most recent notifications for a user, newest first.
    async fn recent(&self, user_id: UserId, limit: u64) -> AppResult<Vec<Notification>>;
}

#[async_trait]
impl NotificationSource for NotificationRepository {
    async fn recent(&self, user_id: UserId, limit: u64) -> AppResult<Vec<Notification>> {
        self.find_by_user(user_id.into_uuid(), limit).await
    }
}
