use serde::{Deserialize, Serialize};

use crate::ticket::TicketType;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub pricing: TicketPrices,
    #[serde(default)]
    pub limits: PurchaseLimits,
    #[serde(default)]
    pub gateways: GatewayConfig,
}

/// Unit price per ticket type
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct TicketPrices {
    #[serde(default = "default_adult_price")]
    pub adult: u64,
    #[serde(default = "default_child_price")]
    pub child: u64,
    #[serde(default)]
    pub infant: u64,
}

impl TicketPrices {
    /// Returns the unit price of the given ticket type.
    pub fn price_of(&self, ticket_type: TicketType) -> u64 {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => self.infant,
        }
    }
}

impl Default for TicketPrices {
    fn default() -> Self {
        Self {
            adult: default_adult_price(),
            child: default_child_price(),
            infant: 0,
        }
    }
}

fn default_adult_price() -> u64 {
    25
}

fn default_child_price() -> u64 {
    15
}

/// Limits applied to a single purchase
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct PurchaseLimits {
    #[serde(default = "default_max_tickets")]
    pub max_tickets_per_purchase: u32,
}

impl Default for PurchaseLimits {
    fn default() -> Self {
        Self {
            max_tickets_per_purchase: default_max_tickets(),
        }
    }
}

fn default_max_tickets() -> u32 {
    25
}

/// Payment and seat reservation gateway configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct GatewayConfig {
    #[serde(default)]
    pub backend: GatewayBackend,
}

/// Available gateway backends
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GatewayBackend {
    /// Accept everything and record it in the log
    #[default]
    Logging,
    // Future: Http
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.pricing.adult, 25);
        assert_eq!(config.pricing.child, 15);
        assert_eq!(config.pricing.infant, 0);
        assert_eq!(config.limits.max_tickets_per_purchase, 25);
        assert_eq!(config.gateways.backend, GatewayBackend::Logging);
    }

    #[test]
    fn test_deserialize_partial_pricing() {
        let toml = r#"
[pricing]
child = 10
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.pricing.adult, 25);
        assert_eq!(config.pricing.child, 10);
        assert_eq!(config.pricing.infant, 0);
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml = r#"
[pricing]
adult = 30
child = 20
infant = 5

[limits]
max_tickets_per_purchase = 10

[gateways]
backend = "logging"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.pricing.price_of(TicketType::Adult), 30);
        assert_eq!(config.pricing.price_of(TicketType::Child), 20);
        assert_eq!(config.pricing.price_of(TicketType::Infant), 5);
        assert_eq!(config.limits.max_tickets_per_purchase, 10);
    }

    #[test]
    fn test_deserialize_unknown_backend_fails() {
        let toml = r#"
[gateways]
backend = "carrier_pigeon"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_prices() {
        let prices = TicketPrices::default();
        assert_eq!(prices.price_of(TicketType::Adult), 25);
        assert_eq!(prices.price_of(TicketType::Child), 15);
        assert_eq!(prices.price_of(TicketType::Infant), 0);
    }
}
