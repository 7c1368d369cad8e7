//! Notification listing and read-state management.

use std::sync::Arc;

use uuid::Uuid;

use eventhub_core::result::AppResult;
use eventhub_database::repositories::NotificationRepository;
use eventhub_entity::notification::Notification;

use crate::context::RequestContext;

/// Default number of notifications returned by [`NotificationService::list`].
pub const DEFAULT_LIST_LIMIT: u64 = 10;

/// Manages the per-user notification log.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification repository.
    repo: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(repo: Arc<NotificationRepository>) -> Self {
        Self { repo }
    }

    /// Lists the current user's notifications, newest first.
    ///
    /// This is a restartable bounded query, not a stream; re-issuing it
    /// reflects whatever has been committed since.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        limit: Option<u64>,
    ) -> AppResult<Vec<Notification>> {
        self.repo
            .find_by_user(ctx.user_id, limit.unwrap_or(DEFAULT_LIST_LIMIT))
            .await
    }

    /// Gets the unread notification count for the badge.
    pub async fn unread_count(&self, ctx: &RequestContext) -> AppResult<i64> {
        self.repo.count_unread(ctx.user_id).await
    }

    /// Marks one notification as read. Idempotent.
    pub async fn mark_read(&self, ctx: &RequestContext, notification_id: Uuid) -> AppResult<()> {
        self.repo.mark_read(notification_id, ctx.user_id).await
    }

    /// Marks every currently-unread notification as read. Inserts that
    /// land while this runs are not required to be included. Idempotent.
    pub async fn mark_all_read(&self, ctx: &RequestContext) -> AppResult<u64> {
        self.repo.mark_all_read(ctx.user_id).await
    }
}
