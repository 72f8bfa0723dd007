use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Installs the global subscriber and routes `log` records into it.
///
/// `RUST_LOG` wins over the configured default filter.
pub fn init(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    tracing_log::LogTracer::init()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.default_filter))?;

    match config.format {
        LogFormat::Json => {
            let subscriber = fmt()
                .json()
                .with_current_span(false)
                .with_env_filter(filter)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogFormat::Pretty => {
            let subscriber = fmt().with_target(true).with_env_filter(filter).finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    Ok(())
}
