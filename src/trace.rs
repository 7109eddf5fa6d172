use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Diagnostics are written to stderr so that stdout carries nothing but the
/// report. Errors from setting the subscriber are ignored, since tests can
/// initialize this multiple times.
pub fn init(color: bool, levels: &str) {
    let filter = EnvFilter::try_new(levels).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_ansi(color)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
