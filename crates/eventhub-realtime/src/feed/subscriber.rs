//! Live feed subscriber for one signed-in user.
//!
//! Lifecycle: `Disconnected -> Subscribing -> Live`, back to `Disconnected`
//! on [`LiveFeed::unsubscribe`] or drop. While `Live`, a background task
//! drains the user's hub channel into the bounded [`FeedView`]. A closed
//! channel triggers resubscription with exponential backoff; until it
//! succeeds the feed degrades to "no live updates" rather than failing.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use uuid::Uuid;

use eventhub_core::config::realtime::RealtimeConfig;
use eventhub_core::types::id::UserId;
use eventhub_core::result::AppResult;
use eventhub_entity::notification::Notification;

use crate::hub::NotificationHub;

use super::source::NotificationSource;
use super::view::FeedView;

/// Connection state of a live feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedState {
    /// No subscription held.
    Disconnected,
    /// Initial fetch or resubscription in progress.
    Subscribing,
    /// Receiving pushed notifications.
    Live,
}

/// A per-user live notification feed.
///
/// Owns its hub subscription; dropping the feed (or any exit path that
/// drops it) releases the subscription so channels are never leaked across
/// navigations.
pub struct LiveFeed {
    user_id: UserId,
    hub: Arc<NotificationHub>,
    source: Arc<dyn NotificationSource>,
    config: RealtimeConfig,
    view: Arc<Mutex<FeedView>>,
    state: Arc<Mutex<FeedState>>,
    task: Option<JoinHandle<()>>,
}

impl LiveFeed {
    /// Create a feed in the `Disconnected` state.
    pub fn new(
        hub: Arc<NotificationHub>,
        source: Arc<dyn NotificationSource>,
        config: RealtimeConfig,
        user_id: UserId,
    ) -> Self {
        let capacity = config.feed_capacity;
        Self {
            user_id,
            hub,
            source,
            config,
            view: Arc::new(Mutex::new(FeedView::new(capacity))),
            state: Arc::new(Mutex::new(FeedState::Disconnected)),
            task: None,
        }
    }

    /// Perform the initial fetch and attach to the hub.
    ///
    /// Already-subscribed feeds return immediately. A failing initial fetch
    /// propagates the store error and leaves the feed `Disconnected`.
    pub async fn subscribe(&mut self) -> AppResult<()> {
        if self.task.is_some() {
            return Ok(());
        }

        *lock(&self.state) = FeedState::Subscribing;

        let initial = match self
            .source
            .recent(self.user_id, self.config.initial_fetch_limit)
            .await
        {
            Ok(initial) => initial,
            Err(e) => {
                *lock(&self.state) = FeedState::Disconnected;
                return Err(e);
            }
        };

        *lock(&self.view) = FeedView::from_initial(initial, self.config.feed_capacity);

        let mut rx = self.hub.subscribe(self.user_id);
        *lock(&self.state) = FeedState::Live;
        debug!(user_id = %self.user_id, "Live feed subscribed");

        let hub = Arc::clone(&self.hub);
        let view = Arc::clone(&self.view);
        let state = Arc::clone(&self.state);
        let user_id = self.user_id;
        let backoff_initial = Duration::from_millis(self.config.resubscribe_backoff_initial_ms);
        let backoff_max = Duration::from_millis(self.config.resubscribe_backoff_max_ms);

        self.task = Some(tokio::spawn(async move {
            let mut backoff = backoff_initial;
            loop {
                match rx.recv().await {
                    Ok(notification) => {
                        backoff = backoff_initial;
                        lock(&view).push_front(notification);
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        // The channel overwrote entries we never read. The
                        // durable store still has them; the view just loses
                        // push delivery for those.
                        warn!(user_id = %user_id, skipped, "Live feed lagged");
                    }
                    Err(RecvError::Closed) => {
                        *lock(&state) = FeedState::Subscribing;
                        warn!(
                            user_id = %user_id,
                            backoff_ms = backoff.as_millis() as u64,
                            "Live feed channel closed, resubscribing"
                        );
                        tokio::time::sleep(backoff).await;
                        backoff = (backoff * 2).min(backoff_max);
                        rx = hub.subscribe(user_id);
                        *lock(&state) = FeedState::Live;
                    }
                }
            }
        }));

        Ok(())
    }

    /// Release the subscription.
    ///
    /// Safe to call repeatedly, and safe on a feed that never connected.
    pub fn unsubscribe(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!(user_id = %self.user_id, "Live feed unsubscribed");
        }
        *lock(&self.state) = FeedState::Disconnected;
    }

    /// Current connection state.
    pub fn state(&self) -> FeedState {
        *lock(&self.state)
    }

    /// Snapshot of the view, newest first.
    pub fn snapshot(&self) -> Vec<Notification> {
        lock(&self.view).snapshot()
    }

    /// Unread entries currently in the view.
    pub fn unread_count(&self) -> usize {
        lock(&self.view).unread_count()
    }

    /// Reflect a mark-read performed against the store into the local view.
    pub fn mark_read(&self, notification_id: Uuid) {
        lock(&self.view).mark_read(notification_id);
    }

    /// Reflect a mark-all-read performed against the store into the local
    /// view.
    pub fn mark_all_read(&self) {
        lock(&self.view).mark_all_read();
    }
}

impl Drop for LiveFeed {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl std::fmt::Debug for LiveFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveFeed")
            .field("user_id", &self.user_id)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

/// Lock a mutex, recovering the guard if a panicking holder poisoned it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
