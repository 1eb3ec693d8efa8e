use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber. Span close events (with their timings)
/// are logged when the filter asks for debug output, which is how slow
/// statistics passes show up.
pub fn init() {
    init_with_default(DEFAULT_FILTER);
}

pub fn init_with_default(default_filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let is_debug = env_filter.to_string().contains("debug");

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(if is_debug {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        });

    // A host that installed its own subscriber keeps it.
    if let Err(e) = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
    {
        tracing::debug!("Keeping existing subscriber: {}", e);
    }
}
