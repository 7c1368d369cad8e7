//! Ticket booking.

pub mod credential;
pub mod service;

pub use credential::CredentialGenerator;
pub use service::{BookingOutcome, BookingService};
