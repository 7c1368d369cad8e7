//! Real-time notification feed configuration.

use serde::{Deserialize, Serialize};

/// Real-time notification hub and feed configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Internal buffer size for per-user broadcast channels.
    #[serde(default = "default_channel_buffer")]
    pub channel_buffer_size: usize,
    /// Maximum number of notifications held in a live feed view.
    #[serde(default = "default_feed_capacity")]
    pub feed_capacity: usize,
    /// Number of notifications fetched on initial feed subscription.
    #[serde(default = "default_initial_fetch")]
    pub initial_fetch_limit: u64,
    /// Initial delay before a resubscribe attempt, in milliseconds.
    #[serde(default = "default_backoff_initial")]
    pub resubscribe_backoff_initial_ms: u64,
    /// Upper bound for the resubscribe backoff delay, in milliseconds.
    #[serde(default = "default_backoff_max")]
    pub resubscribe_backoff_max_ms: u64,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            channel_buffer_size: default_channel_buffer(),
            feed_capacity: default_feed_capacity(),
            initial_fetch_limit: default_initial_fetch(),
            resubscribe_backoff_initial_ms: default_backoff_initial(),
            resubscribe_backoff_max_ms: default_backoff_max(),
        }
    }
}

fn default_channel_buffer() -> usize {
    256
}

fn default_feed_capacity() -> usize {
    10
}

fn default_initial_fetch() -> u64 {
    10
}

fn default_backoff_initial() -> u64 {
    250
}

fn default_backoff_max() -> u64 {
    30_000
}
