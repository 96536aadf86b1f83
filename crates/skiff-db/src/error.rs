use thiserror::Error;

/// Storage failures, split by whether a retry can reasonably succeed.
#[derive(Debug, Error)]
pub enum StoreError {
    /// SQLite reported the database busy or locked; retrying may succeed.
    #[error("database busy: {0}")]
    Retryable(#[source] rusqlite::Error),
    /// Everything else: I/O failures, corruption, schema mismatches.
    #[error("database failure: {0}")]
    Fatal(#[source] rusqlite::Error),
    /// A panic on another thread poisoned the connection lock.
    #[error("database lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Retryable(_))
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        use rusqlite::ErrorCode::{DatabaseBusy, DatabaseLocked};

        match err.sqlite_error_code() {
            Some(DatabaseBusy | DatabaseLocked) => StoreError::Retryable(err),
            _ => StoreError::Fatal(err),
        }
    }
}
