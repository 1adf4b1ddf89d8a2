//! Error types for the gateway module.

use thiserror::Error;

/// Errors reported by payment and seat reservation collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The collaborator refused the operation.
    #[error("Request declined: {0}")]
    Declined(String),

    /// The collaborator could not be reached.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// The gateway could not be built from configuration.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
