//! Tracing setup for the embedding process

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::{LogFormat, LoggingConfig};

/// Initialize the tracing subscriber for the embedding process.
///
/// `RUST_LOG` takes precedence over the configured level when set. When a
/// subscriber is already installed, that one stays; calling this more than
/// once is safe.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_span_events(FmtSpan::CLOSE))
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init(),
    }
    .ok();

    tracing::info!("Logging initialized with level: {}", config.level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_can_be_called_repeatedly() {
        let pretty = LoggingConfig {
            level: "debug".to_string(),
            format: LogFormat::Pretty,
        };
        let json = LoggingConfig {
            level: "warn".to_string(),
            format: LogFormat::Json,
        };

        // Whichever subscriber lands first wins; later calls are no-ops
        init_logging(&pretty);
        init_logging(&json);
        init_logging(&pretty);
    }

    #[test]
    fn test_logging_after_init_does_not_panic() {
        init_logging(&LoggingConfig::default());

        tracing::info!(id = %"user-1", "User registered");
        tracing::debug!("lookup miss");
    }
}
