//! # eventhub-service
//!
//! Business logic services for EventHub. Services orchestrate repositories
//! and the realtime dispatcher; every user-facing operation takes an
//! explicit [`context::RequestContext`] so there is no ambient session
//! state.

pub mod booking;
pub mod context;
pub mod event;
pub mod notification;
pub mod ticket;

pub use context::RequestContext;
