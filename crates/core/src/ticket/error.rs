//! Error types for ticket requests.

use thiserror::Error;

/// Errors raised while constructing a [`TicketTypeRequest`](super::TicketTypeRequest).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketRequestError {
    /// The ticket type name is not one of `ADULT`, `CHILD` or `INFANT`.
    #[error("Unknown ticket type: {0}")]
    UnknownTicketType(String),

    /// The number of tickets must be a positive integer.
    #[error("Invalid number of tickets: {0} (must be at least 1)")]
    InvalidCount(i64),

    /// A serialized batch of requests could not be decoded.
    #[error("Malformed ticket request: {0}")]
    Malformed(String),
}
