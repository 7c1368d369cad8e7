//! Shared value types used across EventHub crates.

pub mod id;
pub mod pagination;

pub use id::{EventId, NotificationId, TicketId, UserId};
pub use pagination::{PageRequest, PageResponse};
