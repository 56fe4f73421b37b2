//! Tracing setup for the CLI
//!
//! Logs go to stderr so command output on stdout stays clean.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter directives, e.g. `debug` or `spendwise=trace`
pub const LOG_ENV: &str = "SPENDWISE_LOG";

/// `text` (default) or `json`
pub const LOG_FORMAT_ENV: &str = "SPENDWISE_LOG_FORMAT";

const DEFAULT_FILTER: &str = "warn";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Build the filter from `SPENDWISE_LOG`, falling back to `warn`.
///
/// `verbose` raises the floor to `debug` when no filter is set.
fn build_filter(directives: Option<&str>, verbose: bool) -> EnvFilter {
    let fallback = if verbose { "debug" } else { DEFAULT_FILTER };
    match directives {
        Some(d) if !d.trim().is_empty() => {
            EnvFilter::try_new(d).unwrap_or_else(|_| EnvFilter::new(fallback))
        }
        _ => EnvFilter::new(fallback),
    }
}

/// Install the global subscriber. Safe to call once per process.
pub fn init_tracing(verbose: bool) {
    let directives = std::env::var(LOG_ENV).ok();
    let format = LogFormat::from_env_value(std::env::var(LOG_FORMAT_ENV).ok().as_deref());
    let registry = tracing_subscriber::registry().with(build_filter(directives.as_deref(), verbose));

    let result = match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    if let Err(e) = result {
        eprintln!("Warning: could not initialise logging: {}", e);
    }
}
