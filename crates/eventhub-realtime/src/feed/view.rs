//! Bounded, ordered in-memory notification view.

use std::collections::VecDeque;

use eventhub_entity::notification::Notification;

/// The most-recent-first window of notifications a feed displays.
///
/// New entries are pushed to the front; the oldest entry falls off once the
/// capacity is reached. Entries are deduplicated by notification id so a
/// re-delivery after a reconnect cannot double up against the initial
/// `list` fetch.
#[derive(Debug)]
pub struct FeedView {
    entries: VecDeque<Notification>,
    capacity: usize,
}

impl FeedView {
    /// Create an empty view.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Create a view seeded from an initial fetch (expected newest first).
    pub fn from_initial(initial: Vec<Notification>, capacity: usize) -> Self {
        let mut view = Self::new(capacity);
        // Insert oldest first so the newest ends up at the front.
        for notification in initial.into_iter().rev() {
            view.push_front(notification);
        }
        view
    }

    /// Push a notification to the front of the view.
    ///
    /// Returns `false` if an entry with the same id is already present.
    pub fn push_front(&mut self, notification: Notification) -> bool {
        if self.entries.iter().any(|n| n.id == notification.id) {
            return false;
        }
        self.entries.push_front(notification);
        self.entries.truncate(self.capacity);
        true
    }

    /// Mark a single entry as read in place.
    pub fn mark_read(&mut self, id: uuid::Uuid) {
        if let Some(entry) = self.entries.iter_mut().find(|n| n.id == id) {
            entry.is_read = true;
        }
    }

    /// Mark every entry as read in place.
    pub fn mark_all_read(&mut self) {
        for entry in &mut self.entries {
            entry.is_read = true;
        }
    }

    /// Number of unread entries currently in the view.
    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| n.is_unread()).count()
    }

    /// Snapshot of the current entries, newest first.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.entries.iter().cloned().collect()
    }

    /// Number of entries in the view.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the view is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
