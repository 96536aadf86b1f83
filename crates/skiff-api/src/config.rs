use std::path::PathBuf;

/// Runtime configuration for the embedding shell, read from the
/// environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
}

impl Config {
    /// Load from environment variables, with a `.env` file if present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let db_path = std::env::var("SKIFF_DB_PATH").unwrap_or_else(|_| "skiff.db".into());

        Self {
            db_path: PathBuf::from(db_path),
        }
    }
}
