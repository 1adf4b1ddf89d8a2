//! Validation and dispatch of ticket purchases.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::{Config, PurchaseLimits, TicketPrices};
use crate::gateway::{
    create_payment_gateway, create_seat_reservation_gateway, AccountId, GatewayError,
    PaymentGateway, SeatReservationGateway,
};
use crate::ticket::{TicketType, TicketTypeRequest};

use super::error::{InvalidPurchase, PurchaseError};
use super::types::PurchaseSummary;

/// Validates ticket purchases and hands valid ones to the payment and seat
/// reservation gateways.
///
/// Holds only prices, the ticket limit and the gateway handles, so one
/// instance can serve any number of independent purchases.
pub struct TicketService {
    prices: TicketPrices,
    max_tickets: u32,
    payments: Arc<dyn PaymentGateway>,
    seats: Arc<dyn SeatReservationGateway>,
}

impl TicketService {
    /// Creates a service with default prices and limits.
    pub fn new(payments: Arc<dyn PaymentGateway>, seats: Arc<dyn SeatReservationGateway>) -> Self {
        Self {
            prices: TicketPrices::default(),
            max_tickets: PurchaseLimits::default().max_tickets_per_purchase,
            payments,
            seats,
        }
    }

    /// Creates a service with prices, limits and gateways taken from config.
    pub fn from_config(config: &Config) -> Result<Self, GatewayError> {
        let payments: Arc<dyn PaymentGateway> =
            Arc::from(create_payment_gateway(&config.gateways)?);
        let seats: Arc<dyn SeatReservationGateway> =
            Arc::from(create_seat_reservation_gateway(&config.gateways)?);

        Ok(Self::new(payments, seats)
            .with_prices(config.pricing)
            .with_max_tickets(config.limits.max_tickets_per_purchase))
    }

    /// Sets the unit prices.
    pub fn with_prices(mut self, prices: TicketPrices) -> Self {
        self.prices = prices;
        self
    }

    /// Sets the maximum number of tickets per purchase.
    pub fn with_max_tickets(mut self, max_tickets: u32) -> Self {
        self.max_tickets = max_tickets;
        self
    }

    /// Validates a purchase, takes payment, then reserves seats.
    ///
    /// Rules are checked in order: account id, running ticket total, empty
    /// purchase, adult presence. Nothing is charged unless all of them pass.
    /// A reservation failure after payment is returned as is.
    pub fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary, PurchaseError> {
        let result = self.validate(account_id, requests);
        let (account, summary) = match result {
            Ok(valid) => valid,
            Err(e) => {
                warn!(account_id, code = e.code(), "Purchase rejected: {}", e);
                return Err(e.into());
            }
        };

        self.payments
            .make_payment(account, summary.total_amount)
            .map_err(|e| {
                warn!(%account, gateway = self.payments.name(), "Payment failed: {}", e);
                PurchaseError::Payment(e)
            })?;

        self.seats
            .reserve_seat(account, summary.total_seats)
            .map_err(|e| {
                warn!(%account, gateway = self.seats.name(), "Seat reservation failed: {}", e);
                PurchaseError::Reservation(e)
            })?;

        info!(
            %account,
            amount = summary.total_amount,
            seats = summary.total_seats,
            tickets = summary.total_tickets,
            "Purchase completed"
        );

        Ok(summary)
    }

    /// Computes the totals for a set of requests without charging anyone.
    pub fn quote(&self, requests: &[TicketTypeRequest]) -> Result<PurchaseSummary, InvalidPurchase> {
        self.summarize(requests)
    }

    fn validate(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<(AccountId, PurchaseSummary), InvalidPurchase> {
        let account =
            AccountId::new(account_id).ok_or(InvalidPurchase::InvalidAccount(account_id))?;
        let summary = self.summarize(requests)?;
        Ok((account, summary))
    }

    fn summarize(&self, requests: &[TicketTypeRequest]) -> Result<PurchaseSummary, InvalidPurchase> {
        let summary = requests.iter().enumerate().try_fold(
            PurchaseSummary::default(),
            |acc, (index, request)| self.accumulate(acc, index, request),
        )?;

        if summary.total_tickets == 0 {
            return Err(InvalidPurchase::NoTickets);
        }

        if (summary.child > 0 || summary.infant > 0) && summary.adult == 0 {
            return Err(InvalidPurchase::NoAdultPresent);
        }

        Ok(summary)
    }

    fn accumulate(
        &self,
        mut acc: PurchaseSummary,
        index: usize,
        request: &TicketTypeRequest,
    ) -> Result<PurchaseSummary, InvalidPurchase> {
        let count = request.count();
        let ticket_type = request.ticket_type();

        // Overflowing u32 is necessarily over the limit too
        let running = acc.total_tickets.saturating_add(count);
        if running > self.max_tickets {
            return Err(InvalidPurchase::TooManyTickets {
                requested: running,
                max: self.max_tickets,
                request_index: index,
            });
        }
        acc.total_tickets = running;

        let line_amount = u64::from(count)
            .checked_mul(self.prices.price_of(ticket_type))
            .ok_or(InvalidPurchase::AmountOverflow)?;
        acc.total_amount = acc
            .total_amount
            .checked_add(line_amount)
            .ok_or(InvalidPurchase::AmountOverflow)?;

        if ticket_type.needs_seat() {
            acc.total_seats += count;
        }
        match ticket_type {
            TicketType::Adult => acc.adult += count,
            TicketType::Child => acc.child += count,
            TicketType::Infant => acc.infant += count,
        }

        debug!(
            index,
            ticket_type = %ticket_type,
            count,
            amount = line_amount,
            running_total = running,
            "Accepted ticket request"
        );

        Ok(acc)
    }
}
