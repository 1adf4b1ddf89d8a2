//! Purchase validation and dispatch.
//!
//! [`TicketService`] checks a purchase against the venue's rules, works out
//! what to charge and how many seats to hold, and then calls the payment and
//! seat reservation gateways in that order.
//!
//! # Rules
//!
//! - The account id must be a positive integer
//! - At most 25 tickets per purchase (configurable), checked as requests are read
//! - At least one ticket
//! - Child and infant tickets need an adult ticket in the same purchase
//! - Infants pay nothing and sit on an adult's lap, so they take no seat
//!
//! # Example
//!
//! ```ignore
//! use turnstile_core::purchase::TicketService;
//! use turnstile_core::ticket::{TicketType, TicketTypeRequest};
//!
//! let service = TicketService::from_config(&config)?;
//! let summary = service.purchase_tickets(
//!     1,
//!     &[
//!         TicketTypeRequest::new(TicketType::Adult, 2)?,
//!         TicketTypeRequest::new(TicketType::Infant, 1)?,
//!     ],
//! )?;
//! assert_eq!(summary.total_amount, 50);
//! assert_eq!(summary.total_seats, 2);
//! ```

mod error;
mod service;
mod types;

pub use error::{InvalidPurchase, PurchaseError};
pub use service::TicketService;
pub use types::PurchaseSummary;
