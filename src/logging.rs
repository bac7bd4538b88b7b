//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the stderr subscriber. Safe to call multiple times.
///
/// `RUST_LOG` overrides the default filter; `verbose` turns on debug
/// output for this crate.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let default = if verbose { "waypoint=debug" } else { "waypoint=info,warn" };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

        let result = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .with_writer(std::io::stderr)
            .compact()
            .try_init();

        if let Err(e) = result {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
