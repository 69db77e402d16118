use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive that overrides the
/// flag-derived level.
pub const LOG_ENV: &str = "NILUSH_LOG";

pub fn filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("nilush=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    })
}

/// Diagnostics go to stderr so they never mix with command output.
pub fn init(debug: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(debug))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
