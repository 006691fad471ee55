//! Log output for `diagwiz-highlight`
//!
//! Console logs go to stderr, filtered by `RUST_LOG` (default `warn`), so they
//! never interleave with tokens on stdout. A second layer writes everything at
//! `debug` to `<config dir>/logs/diagwiz.<date>.log`, keeping the last
//! [`MAX_LOG_FILES`] days.
//!
//! `RUST_LOG=diagwiz_lang::syntax=trace` shows per-parse statistics.

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Daily log files kept before the oldest is removed
pub const MAX_LOG_FILES: usize = 7;

const LOG_PREFIX: &str = "diagwiz";
const LOG_SUFFIX: &str = "log";

fn file_appender() -> Result<RollingFileAppender, String> {
    let logs_dir = crate::config_paths::ensure_logs_dir()?;
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_PREFIX)
        .filename_suffix(LOG_SUFFIX)
        .max_log_files(MAX_LOG_FILES)
        .build(&logs_dir)
        .map_err(|e| format!("Failed to open log file in {}: {}", logs_dir.display(), e))
}

/// Install the global subscriber.
///
/// A missing or unwritable log directory only disables the file layer.
/// Fails if a subscriber is already installed.
pub fn init() -> Result<(), String> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(console_filter);

    let file = match file_appender() {
        Ok(appender) => Some(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_line_number(true)
                .with_filter(EnvFilter::new("debug")),
        ),
        Err(e) => {
            eprintln!("warning: file logging disabled: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .try_init()
        .map_err(|e| format!("Failed to install tracing subscriber: {}", e))
}
