//! Error types for the purchase module.

use thiserror::Error;

use crate::gateway::GatewayError;

/// Business rule violations that make a purchase invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPurchase {
    /// Account identifiers must be positive integers.
    #[error("Invalid account ID: {0}")]
    InvalidAccount(i64),

    /// The running ticket total went over the per-purchase limit.
    #[error("Too many tickets: {requested} requested by request #{request_index}, maximum is {max}")]
    TooManyTickets {
        requested: u32,
        max: u32,
        request_index: usize,
    },

    /// Nothing was requested.
    #[error("No tickets requested")]
    NoTickets,

    /// Child and infant tickets need an adult ticket in the same purchase.
    #[error("Child and infant tickets require at least one adult ticket")]
    NoAdultPresent,

    /// The total amount does not fit the amount type.
    #[error("Total amount overflowed")]
    AmountOverflow,
}

impl InvalidPurchase {
    /// Stable code for this rule violation.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidAccount(_) => "INVALID_ACCOUNT",
            Self::TooManyTickets { .. } => "TOO_MANY_TICKETS",
            Self::NoTickets => "NO_TICKETS",
            Self::NoAdultPresent => "NO_ADULT_PRESENT",
            Self::AmountOverflow => "AMOUNT_OVERFLOW",
        }
    }
}

/// Errors returned by [`TicketService::purchase_tickets`](super::TicketService::purchase_tickets).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    /// The purchase broke a business rule. No collaborator was called.
    #[error(transparent)]
    Invalid(#[from] InvalidPurchase),

    /// Payment failed. No seats were reserved.
    #[error("Payment failed: {0}")]
    Payment(#[source] GatewayError),

    /// Seat reservation failed after payment was taken.
    #[error("Seat reservation failed: {0}")]
    Reservation(#[source] GatewayError),
}

impl PurchaseError {
    /// Whether this error is a rule violation rather than a collaborator failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Returns the rule violation, if that is what this error is.
    pub fn as_invalid(&self) -> Option<&InvalidPurchase> {
        match self {
            Self::Invalid(invalid) => Some(invalid),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            InvalidPurchase::InvalidAccount(0),
            InvalidPurchase::TooManyTickets {
                requested: 26,
                max: 25,
                request_index: 0,
            },
            InvalidPurchase::NoTickets,
            InvalidPurchase::NoAdultPresent,
            InvalidPurchase::AmountOverflow,
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_invalid_is_transparent() {
        let err = PurchaseError::from(InvalidPurchase::NoAdultPresent);
        assert!(err.is_validation());
        assert_eq!(err.as_invalid(), Some(&InvalidPurchase::NoAdultPresent));
        assert_eq!(err.to_string(), InvalidPurchase::NoAdultPresent.to_string());
    }

    #[test]
    fn test_gateway_failures_are_not_validation() {
        let err = PurchaseError::Reservation(GatewayError::Unavailable("down".to_string()));
        assert!(!err.is_validation());
        assert!(err.as_invalid().is_none());
        assert_eq!(err.to_string(), "Seat reservation failed: Service unavailable: down");
    }
}
