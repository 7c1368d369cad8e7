//! Ticket domain entities.

pub mod model;

pub use model::{PartitionedTickets, Ticket, TicketWithEvent};
