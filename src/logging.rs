//! Logging bootstrap.
//!
//! Installs `env_logger` behind the `log` facade. `RUST_LOG` wins over the
//! configured level so a single module can be turned up while debugging.

use env_logger::{Builder, Env};
use log::{debug, info};

use crate::error::{AppError, AppResult};

/// Initializes logging with `level` as the default filter.
///
/// Calling this again after a logger is installed is a no-op.
pub fn init_logging(level: &str) -> AppResult<()> {
    let level = level.trim().to_ascii_lowercase();
    level
        .parse::<log::LevelFilter>()
        .map_err(|_| AppError::Config(format!("unsupported log level '{}'", level)))?;

    let result = Builder::from_env(Env::default().default_filter_or(level.as_str()))
        .format_timestamp_millis()
        .format_target(true)
        .try_init();

    match result {
        Ok(()) => {
            info!(
                "event=app_start version={} level={}",
                env!("CARGO_PKG_VERSION"),
                level
            );
        }
        Err(_) => debug!("logger already installed; keeping it"),
    }
    Ok(())
}
