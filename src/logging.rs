//! Log filter setup shared by the binaries
//!
//! `RUST_LOG` takes full `tracing-subscriber` directives, e.g.
//! `info,azimuth_calc=debug,tower_http=warn`.

use std::env;

use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Builds a filter from directives, falling back to `default` when they
/// are absent or invalid
pub fn env_filter(directives: Option<&str>, default: &str) -> EnvFilter {
    match directives.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(default)),
        None => EnvFilter::new(default),
    }
}

/// Installs the global fmt subscriber filtered by `RUST_LOG`
pub fn init(default: &str) {
    let directives = env::var("RUST_LOG").ok();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref(), default))
        .with_target(true)
        .init();

    if let Some(directives) = directives {
        if EnvFilter::try_new(&directives).is_err() {
            warn!(%directives, default, "invalid RUST_LOG, using default filter");
        }
    }
}
