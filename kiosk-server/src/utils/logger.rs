//! Logging Infrastructure
//!
//! Console output (text or JSON) filtered by `RUST_LOG`, falling back to the
//! configured level. When the log directory exists a daily rotating JSON
//! file is written as well.

use std::path::Path;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE_PREFIX: &str = "kiosk-server";

/// Initialize the global subscriber
///
/// # Arguments
/// * `level` - Log level used when `RUST_LOG` is not set (e.g. "info")
/// * `json_format` - JSON console output instead of human-readable text
/// * `log_dir` - Optional directory for the rolling log file
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (json_layer, text_layer) = if json_format {
        (Some(fmt::layer().json().with_target(true)), None)
    } else {
        (None, Some(fmt::layer().with_target(true)))
    };

    let file_layer = match log_dir {
        Some(dir) if dir.exists() => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            Some(fmt::layer().json().with_ansi(false).with_writer(appender))
        }
        _ => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

/// Initialize console-only logging at `level`
pub fn init_logger(level: &str) -> anyhow::Result<()> {
    init_logger_with_file(level, false, None)
}
