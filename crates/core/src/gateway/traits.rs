//! Trait definitions for the external collaborators.

use super::error::GatewayError;
use super::types::AccountId;

/// Takes payment for a purchase.
pub trait PaymentGateway: Send + Sync {
    /// Returns the name of this gateway implementation.
    fn name(&self) -> &str;

    /// Charges `amount` to the given account.
    fn make_payment(&self, account: AccountId, amount: u64) -> Result<(), GatewayError>;
}

/// Reserves seats for a purchase.
pub trait SeatReservationGateway: Send + Sync {
    /// Returns the name of this gateway implementation.
    fn name(&self) -> &str;

    /// Reserves `seats` seats for the given account.
    fn reserve_seat(&self, account: AccountId, seats: u32) -> Result<(), GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DecliningGateway;

    impl PaymentGateway for DecliningGateway {
        fn name(&self) -> &str {
            "declining"
        }

        fn make_payment(&self, _account: AccountId, amount: u64) -> Result<(), GatewayError> {
            Err(GatewayError::Declined(format!("cannot charge {}", amount)))
        }
    }

    #[test]
    fn test_trait_object_dispatch() {
        let gateway: Box<dyn PaymentGateway> = Box::new(DecliningGateway);
        let account = AccountId::new(7).unwrap();

        assert_eq!(gateway.name(), "declining");
        assert_eq!(
            gateway.make_payment(account, 40),
            Err(GatewayError::Declined("cannot charge 40".to_string()))
        );
    }
}
