//! Shared tracing setup for binaries: stderr plus an optional daily-rolling file.
//!
//! `RUST_LOG` wins over [`LogSettings::level`]. File output is plain text (no ANSI) and written
//! through a non-blocking worker; keep the returned guard alive until exit or buffered lines are
//! lost.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::{LoadError, LogSettings};

const LOG_FILE_PREFIX: &str = "promptsmith";
const LOG_FILE_SUFFIX: &str = "log";

/// Builds the filter: `RUST_LOG` when set and valid, else `settings.level`, else `warn`.
pub fn env_filter(settings: &LogSettings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Installs the global subscriber. Returns the file writer guard when `settings.dir` is set.
///
/// Fails with [`LoadError::TracingInit`] when the log directory cannot be used or a global
/// subscriber is already installed.
pub fn init_tracing(settings: &LogSettings) -> Result<Option<WorkerGuard>, LoadError> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(env_filter(settings));

    let (file_layer, guard) = match &settings.dir {
        Some(dir) => {
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(LOG_FILE_PREFIX)
                .filename_suffix(LOG_FILE_SUFFIX)
                .build(dir)
                .map_err(|e| LoadError::TracingInit(format!("{}: {e}", dir.display())))?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(env_filter(settings));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| LoadError::TracingInit(e.to_string()))?;
    Ok(guard)
}
