//! Logging setup for the preferences editor.
//!
//! Library code logs through the `tracing` macros; binaries call one of the
//! init functions here once at startup.

mod types;

pub use types::LogLevel;

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// File name prefix of rolled log files.
const LOG_FILE_PREFIX: &str = "b2prefs";

/// Initialize global tracing subscriber for application-wide logging.
///
/// This sets up a subscriber that:
/// - Respects RUST_LOG environment variable
/// - Falls back to the provided default level
/// - Outputs to stderr
///
/// Should be called once at application startup.
pub fn init_tracing(default_level: LogLevel) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(env_filter(default_level))
        .init();
}

/// Initialize tracing with an additional daily log file in `logs_dir`.
///
/// The returned guard flushes the file writer when dropped and must be kept
/// alive for as long as logging is needed.
pub fn init_tracing_with_file(default_level: LogLevel, logs_dir: &Path) -> Result<WorkerGuard, InitError> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(logs_dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .with(env_filter(default_level))
        .init();

    Ok(guard)
}

/// Initialize tracing for tests (only logs warnings and above).
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

/// `RUST_LOG` if set, otherwise everything at `default_level` and above.
fn env_filter(default_level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(LevelFilter::from_level(default_level.to_tracing_level()).into())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_uses_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert_eq!(env_filter(LogLevel::Debug).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(env_filter(LogLevel::Warn).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_tracing_can_be_installed_twice() {
        init_test_tracing();
        init_test_tracing();
        tracing::warn!("test subscriber active");
    }
}
