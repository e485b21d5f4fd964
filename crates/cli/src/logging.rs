use anyhow::{anyhow, Result};
use larder_core::config::{AppConfig, LogFormat};
use tracing::Level;

/// Install the global subscriber. Events go to stderr so stdout carries only command output.
pub fn init_logging(config: &AppConfig) -> Result<()> {
    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(log_level)
        .with_writer(std::io::stderr);

    let installed = match config.logging.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|error| anyhow!("failed to install log subscriber: {error}"))
}
