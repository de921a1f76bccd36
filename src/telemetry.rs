//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt};

use passforge_core::config::logging::LoggingConfig;

/// Installs a global `fmt` subscriber for the configured format.
///
/// `RUST_LOG` overrides `config.level`. Only the first call installs a
/// subscriber; later calls leave the existing one in place.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let installed = match config.format.as_str() {
        "json" => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .try_init(),
        _ => fmt()
            .pretty()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
    };

    if installed.is_ok() {
        tracing::info!(
            level = %config.level,
            format = %config.format,
            "Logging initialized"
        );
    }
}
