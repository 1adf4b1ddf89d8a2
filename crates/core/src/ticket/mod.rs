//! Ticket types and the validated request value object.

mod error;
mod types;

pub use error::TicketRequestError;
pub use types::{TicketType, TicketTypeRequest};
