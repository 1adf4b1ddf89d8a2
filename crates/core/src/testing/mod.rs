//! Testing utilities and mock implementations of the gateway traits.
//!
//! The mocks record every call so tests can assert on exactly what would
//! have been charged and reserved, and can be primed to fail the next call.
//!
//! # Example
//!
//! ```rust,ignore
//! use turnstile_core::testing::{fixtures, MockPaymentGateway, MockSeatReservationGateway};
//!
//! let payments = Arc::new(MockPaymentGateway::new());
//! let seats = Arc::new(MockSeatReservationGateway::new());
//! let service = TicketService::new(payments.clone(), seats.clone());
//!
//! service.purchase_tickets(1, &[fixtures::adult(2), fixtures::infant(1)])?;
//! assert_eq!(seats.total_reserved(), 2);
//! ```

mod mock_payment;
mod mock_seat_reservation;

pub use mock_payment::{MockPaymentGateway, RecordedPayment};
pub use mock_seat_reservation::{MockSeatReservationGateway, RecordedReservation};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::ticket::{TicketType, TicketTypeRequest};

    /// Request for `count` tickets of `ticket_type`.
    ///
    /// Panics if `count` is zero; fixtures are for well-formed requests.
    pub fn request(ticket_type: TicketType, count: u32) -> TicketTypeRequest {
        match TicketTypeRequest::new(ticket_type, i64::from(count)) {
            Ok(request) => request,
            Err(e) => panic!("invalid fixture request: {}", e),
        }
    }

    /// Request for `count` adult tickets.
    pub fn adult(count: u32) -> TicketTypeRequest {
        request(TicketType::Adult, count)
    }

    /// Request for `count` child tickets.
    pub fn child(count: u32) -> TicketTypeRequest {
        request(TicketType::Child, count)
    }

    /// Request for `count` infant tickets.
    pub fn infant(count: u32) -> TicketTypeRequest {
        request(TicketType::Infant, count)
    }
}
