//! External collaborators a purchase is handed to once it validates.
//!
//! The payment provider and the seat booking system live outside this crate.
//! They are reached through the [`PaymentGateway`] and
//! [`SeatReservationGateway`] traits so that callers can plug in real clients
//! and tests can plug in the recording mocks from [`crate::testing`].
//!
//! # Example
//!
//! ```ignore
//! use turnstile_core::gateway::{create_payment_gateway, AccountId};
//! use turnstile_core::config::GatewayConfig;
//!
//! let payments = create_payment_gateway(&GatewayConfig::default())?;
//! payments.make_payment(AccountId::new(1).unwrap(), 65)?;
//! ```

mod error;
mod logging;
mod traits;
mod types;

pub use error::GatewayError;
pub use logging::{LoggingPaymentGateway, LoggingSeatReservationGateway};
pub use traits::{PaymentGateway, SeatReservationGateway};
pub use types::AccountId;

use crate::config::{GatewayBackend, GatewayConfig};

/// Factory function to create a payment gateway from config
pub fn create_payment_gateway(
    config: &GatewayConfig,
) -> Result<Box<dyn PaymentGateway>, GatewayError> {
    match config.backend {
        GatewayBackend::Logging => Ok(Box::new(LoggingPaymentGateway::new())),
    }
}

/// Factory function to create a seat reservation gateway from config
pub fn create_seat_reservation_gateway(
    config: &GatewayConfig,
) -> Result<Box<dyn SeatReservationGateway>, GatewayError> {
    match config.backend {
        GatewayBackend::Logging => Ok(Box::new(LoggingSeatReservationGateway::new())),
    }
}
