use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. The embedding shell calls this
/// once at startup, before opening the database.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "skiff=debug".into()))
        .init();
}
