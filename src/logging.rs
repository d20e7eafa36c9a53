//! Logging setup for the `looksee` binary.
//!
//! Logs go to stderr (so command output on stdout stays machine-readable) and
//! to a daily-rotated file in the configured log directory. The library only
//! emits `tracing` events; installing a subscriber is the binary's job.
//!
//! ```no_run
//! use looksee::config::Settings;
//! use looksee::logging;
//!
//! let settings = Settings::load().unwrap();
//! let log_dir = logging::init(&settings).unwrap();
//! tracing::info!(dir = %log_dir.display(), "ready");
//! ```

use std::path::PathBuf;

use tracing::Subscriber;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{
    fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter, Layer,
};

use crate::config::{Settings, SettingsError};

/// Errors that can occur while installing the subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to resolve log directory: {0}")]
    LogDir(#[from] SettingsError),

    #[error("Failed to create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create log file appender: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    #[error("Invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Failed to install subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Build the env filter: `RUST_LOG` wins, then the configured level.
pub fn env_filter(default_level: &str) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(default_level)?),
    }
}

/// Install the global subscriber with stderr and rolling-file output.
///
/// Returns the directory log files are written to.
pub fn init(settings: &Settings) -> Result<PathBuf, LoggingError> {
    let general = &settings.settings;
    let log_dir = general.resolved_log_dir()?;

    std::fs::create_dir_all(&log_dir).map_err(|source| LoggingError::CreateDir {
        path: log_dir.clone(),
        source,
    })?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .max_log_files(general.max_log_files)
        .filename_prefix(general.log_file.as_str())
        .filename_suffix("log")
        .build(&log_dir)?;

    let file_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(false)
        .with_writer(file_appender);

    tracing_subscriber::registry()
        .with(env_filter(&general.log_level)?)
        .with(stderr_layer())
        .with(file_layer)
        .try_init()?;

    tracing::debug!(dir = %log_dir.display(), "logging initialized");

    Ok(log_dir)
}

/// Install a stderr-only subscriber, for when [`init`] could not set up
/// the log file.
///
/// An unparsable configured level falls back to `info`.
pub fn init_stderr(settings: &Settings) -> Result<(), LoggingError> {
    let filter = env_filter(&settings.settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer())
        .try_init()?;

    Ok(())
}

fn stderr_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
}
