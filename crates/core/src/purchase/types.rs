use serde::{Deserialize, Serialize};

use crate::ticket::TicketType;

/// Totals computed for a valid purchase.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseSummary {
    /// Amount charged to the account.
    pub total_amount: u64,
    /// Seats reserved (adult and child tickets).
    pub total_seats: u32,
    /// Tickets of every type.
    pub total_tickets: u32,
    pub adult: u32,
    pub child: u32,
    pub infant: u32,
}

impl PurchaseSummary {
    /// Number of tickets of the given type.
    pub fn count_of(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => self.infant,
        }
    }
}
