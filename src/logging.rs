//! Tracing subscriber setup.
//!
//! The terminal belongs to the TUI, so log lines go to a file in the
//! data directory. `RUST_LOG` controls the filter; the default level
//! is `info`.

use color_eyre::Result;
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Failures here are reported but should not prevent the app from
/// starting; callers log-and-continue.
pub fn init() -> Result<()> {
    let path = crate::storage::log_file_path()?;
    let file = File::create(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    tracing::info!("Logging to {:?}", path);
    Ok(())
}
