//! Tracing subscriber setup.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Logs go to stderr so stdout carries only program output.
pub fn init(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(build_filter(verbose, rust_log.as_deref()))
        .init();
}

/// Filter from `RUST_LOG` directives when set and non-empty, `warn`
/// otherwise. `verbose` adds a global `debug` directive on top.
pub fn build_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let filter = match rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::default().add_directive(Level::WARN.into()),
    };
    if verbose {
        filter.add_directive(Level::DEBUG.into())
    } else {
        filter
    }
}
