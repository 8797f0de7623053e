//! Diagnostic logging
//!
//! Command output goes to stdout; diagnostics go to stderr through `tracing`
//! so they never mix with what the user asked to see.

use crate::config::Config;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber
///
/// Invalid filter directives fall back to [`crate::config::DEFAULT_LOG_FILTER`].
/// Calling this twice is harmless: the second registration is ignored.
pub fn init(config: &Config) {
    let filter = EnvFilter::try_new(config.log_filter())
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(config.color())
                .with_writer(std::io::stderr.with_max_level(tracing::Level::TRACE)),
        )
        .try_init();
}
