//! File logging sink.
//!
//! Installed once at process start, before any route is served; every
//! component emits through the global `tracing` dispatcher from then on.
//! Lines are written to the file as they are emitted, so there is nothing
//! to flush at shutdown.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "api.log";

/// Opens `api.log` in append mode under `log_dir` and installs a subscriber
/// writing timestamped, leveled lines to it. The filter honors `RUST_LOG`
/// and defaults to `info`.
pub fn init(log_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(log_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join(LOG_FILE))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
