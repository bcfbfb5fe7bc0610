//! Logging setup.
//!
//! Timestamped log lines go to stdout and, without ANSI colors, to an
//! append-mode log file. The filter defaults to `info` and can be overridden
//! via `RUST_LOG`.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::types::Result;

/// Open the log file in append mode, creating it if needed.
pub fn open_log_file(path: &Path) -> Result<File> {
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Install the global subscriber: stdout layer plus file layer.
///
/// # Errors
///
/// Returns an I/O error when the log file cannot be opened. Must be called
/// at most once per process.
pub fn init(log_file: &Path) -> Result<()> {
    let file = open_log_file(log_file)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .init();

    Ok(())
}
