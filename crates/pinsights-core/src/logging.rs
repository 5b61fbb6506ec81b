//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "PINSIGHTS_LOG";

const DEFAULT_FILTER: &str =
    "privacy_insights=info,pinsights_app=info,pinsights_client=info,pinsights_tui=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/privacy-insights/logs/`.
/// Stdout belongs to the TUI or to headless NDJSON output, so nothing is
/// logged there. Log level is controlled by the `PINSIGHTS_LOG` environment
/// variable.
///
/// # Examples
/// ```bash
/// PINSIGHTS_LOG=debug pinsights
/// PINSIGHTS_LOG=pinsights_client=trace pinsights --headless https://example.com
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "pinsights.log");

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Privacy Insights starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Directory holding the daily `pinsights.log.YYYY-MM-DD` files
pub fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("privacy-insights").join("logs")
}
