use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - At least one ticket may be bought per purchase
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.limits.max_tickets_per_purchase == 0 {
        return Err(ConfigError::ValidationError(
            "limits.max_tickets_per_purchase cannot be 0".to_string(),
        ));
    }

    Ok(())
}
