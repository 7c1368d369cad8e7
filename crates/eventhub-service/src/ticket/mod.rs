//! Ticket services.

pub mod service;

pub use service::TicketService;
