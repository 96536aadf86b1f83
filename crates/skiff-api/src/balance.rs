use std::sync::Arc;

use skiff_db::Database;

use crate::error::ServiceError;

/// The trader's single mutable balance. One logical row, last write wins.
#[derive(Clone)]
pub struct Balance {
    db: Arc<Database>,
}

impl Balance {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Stored amount, or 0.0 when nothing has been saved yet.
    pub async fn get(&self) -> Result<f64, ServiceError> {
        let db = self.db.clone();
        let amount = tokio::task::spawn_blocking(move || db.get_balance()).await??;
        Ok(amount.unwrap_or(0.0))
    }

    pub async fn set(&self, amount: f64) -> Result<(), ServiceError> {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || db.upsert_balance(amount)).await??;
        Ok(())
    }
}
