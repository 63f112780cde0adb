//! Core types and presentation rules for the `CivicPulse` web client
//!
//! Everything in this crate is plain Rust with no DOM access, so the rules the
//! pages render with (severity colors, score formatting, form transitions) can
//! be exercised natively.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod config;
pub mod error;
pub mod forms;
pub mod presentation;
pub mod sequence;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use types::{IssueSummary, NewReport, TenantId};

use config::LoggingConfig;
use tracing_subscriber::fmt::MakeWriter;

/// Initialize the logging system
///
/// Installs a global `tracing` subscriber filtered by `config.level` and
/// formatted as text or JSON according to `config.format`. Timestamps are
/// omitted because the browser clock is not reachable from `std`.
///
/// # Errors
///
/// Returns an error if the level directive is invalid or a global subscriber
/// is already installed.
pub fn init_logging<W>(config: &LoggingConfig, writer: W) -> Result<()>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_new(&config.level).map_err(|e| Error::Configuration {
        message: format!("invalid log level '{}': {e}", config.level),
    })?;

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .without_time();

    let installed = if config.format.eq_ignore_ascii_case("json") {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()
    };

    installed.map_err(|e| Error::Configuration {
        message: format!("failed to install logger: {e}"),
    })
}
