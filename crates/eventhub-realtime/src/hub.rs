//! Per-user notification broadcast hub.
//!
//! Each user gets a lazily created `tokio::sync::broadcast` channel keyed
//! by user id. Publishing a notification only reaches subscribers of that
//! user's channel, which is what isolates one user's feed from another's.

use dashmap::DashMap;
use tokio::sync::broadcast;

use eventhub_core::types::id::UserId;
use eventhub_entity::notification::Notification;

/// Fan-out hub for newly committed notifications.
#[derive(Debug)]
pub struct NotificationHub {
    /// User id → broadcast sender.
    channels: DashMap<UserId, broadcast::Sender<Notification>>,
    /// Buffer size for newly created channels.
    buffer_size: usize,
}

impl NotificationHub {
    /// Create a new hub.
    pub fn new(buffer_size: usize) -> Self {
        Self {
            channels: DashMap::new(),
            buffer_size,
        }
    }

    /// Subscribe to a user's notification channel, creating it on demand.
    pub fn subscribe(&self, user_id: UserId) -> broadcast::Receiver<Notification> {
        self.channels
            .entry(user_id)
            .or_insert_with(|| broadcast::channel(self.buffer_size).0)
            .subscribe()
    }

    /// Publish a notification to its recipient's channel.
    ///
    /// Returns the number of live subscribers that received it. A user with
    /// no open feed simply gets zero deliveries; the durable row in the
    /// store is the source of truth either way.
    pub fn publish(&self, notification: &Notification) -> usize {
        let recipient = UserId::from(notification.user_id);
        let delivered = match self.channels.get(&recipient) {
            Some(tx) => tx.send(notification.clone()).unwrap_or(0),
            None => 0,
        };

        if delivered == 0 {
            // Drop channels nobody is listening to anymore.
            self.channels
                .remove_if(&recipient, |_, tx| tx.receiver_count() == 0);
        }

        delivered
    }

    /// Number of live subscribers for a user.
    pub fn subscriber_count(&self, user_id: UserId) -> usize {
        self.channels
            .get(&user_id)
            .map(|tx| tx.receiver_count())
            .unwrap_or(0)
    }

    /// Number of users with an active channel.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }
}
