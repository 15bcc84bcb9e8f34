use crate::{FactoryError, TelemetryConfig};
use tracing_subscriber::EnvFilter;

/// Installs a global compact `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Fails if the level
/// does not parse or a subscriber is already installed.
pub fn init(config: &TelemetryConfig) -> Result<(), FactoryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| {
            FactoryError::telemetry(format!(
                "invalid log level/filter '{}': {}",
                config.log_level, e
            ))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| FactoryError::telemetry(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        let config = TelemetryConfig::default();
        let _ = init(&config);

        assert!(matches!(init(&config), Err(FactoryError::Telemetry(_))));
    }
}
