//! Structured logging for the orbiter tools.
//!
//! The library only emits `tracing` events; binaries call [`init_logging`] once to
//! install a console subscriber. `RUST_LOG` takes precedence over the configured level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither `RUST_LOG` nor the config provide one.
pub const DEFAULT_FILTER: &str = "info";

/// Build the filter: `RUST_LOG` first, then `level`, then [`DEFAULT_FILTER`].
pub fn env_filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = level.filter(|l| !l.is_empty()).unwrap_or(DEFAULT_FILTER);
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    })
}

/// Install the global subscriber, writing to stderr so that CSV output on stdout stays clean.
///
/// Calling it twice is harmless: the second installation is ignored.
pub fn init_logging(level: Option<&str>) {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let _ = tracing_subscriber::registry()
        .with(env_filter(level))
        .with(console_layer)
        .try_init();
}
