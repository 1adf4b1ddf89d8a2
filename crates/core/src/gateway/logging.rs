use tracing::info;

use super::{AccountId, GatewayError, PaymentGateway, SeatReservationGateway};

/// Payment gateway that accepts every charge and records it in the log.
/// Stands in for the third-party payment provider.
pub struct LoggingPaymentGateway;

impl LoggingPaymentGateway {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingPaymentGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentGateway for LoggingPaymentGateway {
    fn name(&self) -> &str {
        "logging"
    }

    fn make_payment(&self, account: AccountId, amount: u64) -> Result<(), GatewayError> {
        info!(account = %account, amount, "Payment taken");
        Ok(())
    }
}

/// Seat reservation gateway that accepts every reservation and records it in the log.
pub struct LoggingSeatReservationGateway;

impl LoggingSeatReservationGateway {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingSeatReservationGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl SeatReservationGateway for LoggingSeatReservationGateway {
    fn name(&self) -> &str {
        "logging"
    }

    fn reserve_seat(&self, account: AccountId, seats: u32) -> Result<(), GatewayError> {
        info!(account = %account, seats, "Seats reserved");
        Ok(())
    }
}
