//! Tracing setup for the binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to whoever embeds it. Logs go to stderr so they never mix with command
//! output on stdout.

use crate::error::{Result, RosterError};
use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static INIT: OnceCell<()> = OnceCell::new();

/// Default filter when `RUST_LOG` is unset.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "roster=debug"
    } else {
        "roster=warn"
    }
}

/// Install the global fmt subscriber. Safe to call more than once.
pub fn init_logging(verbose: bool) -> Result<()> {
    INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter(verbose)))
            .map_err(|e| RosterError::Store(format!("Invalid log filter: {}", e)))?;

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .map_err(|e| RosterError::Store(format!("Failed to install logger: {}", e)))
    })?;
    Ok(())
}
