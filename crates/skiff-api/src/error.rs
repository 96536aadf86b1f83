use skiff_db::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("password hashing failed: {0}")]
    PasswordHash(String),
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
