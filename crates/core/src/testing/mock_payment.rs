//! Mock payment gateway for testing.

use std::sync::{Mutex, MutexGuard};

use crate::gateway::{AccountId, GatewayError, PaymentGateway};

/// A recorded payment for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedPayment {
    /// Account that was charged.
    pub account: AccountId,
    /// Amount that was charged.
    pub amount: u64,
    /// Whether the payment succeeded.
    pub success: bool,
}

/// Mock implementation of the PaymentGateway trait.
///
/// Records every call and can be primed to fail the next one.
///
/// # Example
///
/// ```rust,ignore
/// use turnstile_core::testing::MockPaymentGateway;
///
/// let payments = Arc::new(MockPaymentGateway::new());
/// let service = TicketService::new(payments.clone(), seats);
///
/// service.purchase_tickets(1, &[adult(2)])?;
///
/// let recorded = payments.recorded_payments();
/// assert_eq!(recorded[0].amount, 50);
/// ```
#[derive(Debug, Default)]
pub struct MockPaymentGateway {
    payments: Mutex<Vec<RecordedPayment>>,
    /// If set, the next payment will fail with this error.
    next_error: Mutex<Option<GatewayError>>,
}

impl MockPaymentGateway {
    /// Create a new mock payment gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded payments, successful or not.
    pub fn recorded_payments(&self) -> Vec<RecordedPayment> {
        lock(&self.payments).clone()
    }

    /// Get the number of payments attempted.
    pub fn call_count(&self) -> usize {
        lock(&self.payments).len()
    }

    /// Sum of all successful payments.
    pub fn total_charged(&self) -> u64 {
        lock(&self.payments)
            .iter()
            .filter(|p| p.success)
            .map(|p| p.amount)
            .sum()
    }

    /// Clear recorded payments.
    pub fn clear_recorded_payments(&self) {
        lock(&self.payments).clear();
    }

    /// Configure the next payment to fail with the given error.
    pub fn set_next_error(&self, error: GatewayError) {
        *lock(&self.next_error) = Some(error);
    }

    /// Clear any pending error.
    pub fn clear_next_error(&self) {
        *lock(&self.next_error) = None;
    }
}

impl PaymentGateway for MockPaymentGateway {
    fn name(&self) -> &str {
        "mock"
    }

    fn make_payment(&self, account: AccountId, amount: u64) -> Result<(), GatewayError> {
        let error = lock(&self.next_error).take();
        lock(&self.payments).push(RecordedPayment {
            account,
            amount,
            success: error.is_none(),
        });

        match error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Locks a mock's state, recovering it if a panicking test poisoned the lock.
pub(super) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
