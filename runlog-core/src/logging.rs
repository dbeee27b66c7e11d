use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the tool's own diagnostics.
///
/// Filtering comes from the environment (`RUST_LOG`), defaulting to "info".
/// Output is plain line-oriented fmt on stderr; the run log itself is the
/// recorder's file, never the subscriber's.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
