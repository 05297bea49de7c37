//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/open-in-code/logs/`.
/// Log level is controlled by the `OIC_LOG` environment variable.
///
/// # Examples
/// ```bash
/// OIC_LOG=debug nautilus
/// OIC_LOG=trace nautilus
/// ```
///
/// Runs embedded in the file-manager host: a second call, or any other
/// bootstrap problem, returns an error rather than panicking.
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "oic.log");

    // Default to info, allow override via OIC_LOG
    let env_filter = EnvFilter::try_from_env("OIC_LOG")
        .unwrap_or_else(|_| EnvFilter::new("oic_core=info,oic_menu=info,warn"));

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
        .try_init()
        .map_err(|e| Error::logging(e.to_string()))?;

    tracing::info!("Open in Code extension loaded");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("open-in-code").join("logs")
}
