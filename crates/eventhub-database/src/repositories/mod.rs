//! Concrete repository implementations.

pub mod event;
pub mod notification;
pub mod ticket;

pub use event::EventRepository;
pub use notification::NotificationRepository;
pub use ticket::TicketRepository;
