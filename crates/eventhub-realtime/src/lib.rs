//! # eventhub-realtime
//!
//! Push-based notification delivery for EventHub. The [`hub::NotificationHub`]
//! fans newly committed notifications out to per-user broadcast channels;
//! the [`dispatcher::NotificationDispatcher`] persists a notification and
//! then publishes it; the [`feed::LiveFeed`] maintains a bounded, ordered
//! in-memory view for one signed-in user.

pub mod dispatcher;
pub mod feed;
pub mod hub;

pub use dispatcher::NotificationDispatcher;
pub use feed::{FeedState, LiveFeed};
pub use hub::NotificationHub;
