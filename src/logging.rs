use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "FETCH_PROJECT_LOG";

/// Diagnostics go to stderr; stdout is reserved for the run transcript.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("fetch_project=warn"));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}
