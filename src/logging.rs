//! Log setup
//!
//! The terminal belongs to the TUI while a game runs, so log output goes to a
//! file instead of stderr.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "ssnake=info";

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "ssnake.log";

/// Install the global subscriber, appending plain-text records to `log_file`.
///
/// An explicit `filter` wins over `RUST_LOG`, which wins over [`DEFAULT_FILTER`].
pub fn init_logging(log_file: &Path, filter: Option<&str>) -> Result<()> {
    let filter = match filter {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("Invalid log filter {:?}", directives))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()),
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file {:?}", log_file))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(())
}
