pub mod config;
pub mod gateway;
pub mod purchase;
pub mod testing;
pub mod ticket;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, GatewayBackend,
    GatewayConfig, PurchaseLimits, TicketPrices,
};
pub use gateway::{
    create_payment_gateway, create_seat_reservation_gateway, AccountId, GatewayError,
    LoggingPaymentGateway, LoggingSeatReservationGateway, PaymentGateway, SeatReservationGateway,
};
pub use purchase::{InvalidPurchase, PurchaseError, PurchaseSummary, TicketService};
pub use ticket::{TicketRequestError, TicketType, TicketTypeRequest};
