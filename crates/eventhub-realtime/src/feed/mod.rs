//! Live notification feed.

pub mod source;
pub mod subscriber;
pub mod view;

pub use source::NotificationSource;
pub use subscriber::{FeedState, LiveFeed};
pub use view::FeedView;
