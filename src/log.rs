// src/log.rs
use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, fmt::time::uptime};

use crate::config::consts::DEFAULT_LOG_FILTER;

static INIT: Once = Once::new();

/// Filter used when `RUST_LOG` is unset: `-v` → info, `-vv` → debug, `-vvv` → trace.
pub fn filter_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => DEFAULT_LOG_FILTER,
        1 => "fbref_scrape=info",
        2 => "fbref_scrape=debug",
        _ => "fbref_scrape=trace",
    }
}

/// Install the global subscriber: stderr with elapsed-time stamps.
/// Later calls are no-ops.
pub fn init(verbosity: u8) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(filter_for(verbosity)));

        let _ = fmt()
            .with_env_filter(filter)
            .with_timer(uptime())
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
