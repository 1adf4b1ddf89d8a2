//! Mock seat reservation gateway for testing.

use std::sync::Mutex;

use super::mock_payment::lock;
use crate::gateway::{AccountId, GatewayError, SeatReservationGateway};

/// A recorded reservation for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedReservation {
    /// Account the seats were reserved for.
    pub account: AccountId,
    /// Number of seats requested.
    pub seats: u32,
    /// Whether the reservation succeeded.
    pub success: bool,
}

/// Mock implementation of the SeatReservationGateway trait.
#[derive(Debug, Default)]
pub struct MockSeatReservationGateway {
    reservations: Mutex<Vec<RecordedReservation>>,
    next_error: Mutex<Option<GatewayError>>,
}

impl MockSeatReservationGateway {
    /// Create a new mock seat reservation gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded reservations, successful or not.
    pub fn recorded_reservations(&self) -> Vec<RecordedReservation> {
        lock(&self.reservations).clone()
    }

    /// Get the number of reservations attempted.
    pub fn call_count(&self) -> usize {
        lock(&self.reservations).len()
    }

    /// Sum of all successfully reserved seats.
    pub fn total_reserved(&self) -> u32 {
        lock(&self.reservations)
            .iter()
            .filter(|r| r.success)
            .map(|r| r.seats)
            .sum()
    }

    /// Clear recorded reservations.
    pub fn clear_recorded_reservations(&self) {
        lock(&self.reservations).clear();
    }

    /// Configure the next reservation to fail with the given error.
    pub fn set_next_error(&self, error: GatewayError) {
        *lock(&self.next_error) = Some(error);
    }

    /// Clear any pending error.
    pub fn clear_next_error(&self) {
        *lock(&self.next_error) = None;
    }
}

impl SeatReservationGateway for MockSeatReservationGateway {
    fn name(&self) -> &str {
        "mock"
    }

    fn reserve_seat(&self, account: AccountId, seats: u32) -> Result<(), GatewayError> {
        let error = lock(&self.next_error).take();
        lock(&self.reservations).push(RecordedReservation {
            account,
            seats,
            success: error.is_none(),
        });

        match error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
