use std::sync::Arc;

use tracing::warn;

use skiff_db::models::ConversionRow;
use skiff_db::Database;
use skiff_types::{ConversionRecord, Currency};

use crate::error::ServiceError;

/// Read side of the conversion audit log.
#[derive(Clone)]
pub struct Ledger {
    db: Arc<Database>,
}

impl Ledger {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Every recorded conversion, most recent first.
    pub async fn list(&self) -> Result<Vec<ConversionRecord>, ServiceError> {
        self.query(None).await
    }

    /// The `limit` most recent conversions.
    pub async fn recent(&self, limit: u32) -> Result<Vec<ConversionRecord>, ServiceError> {
        self.query(Some(limit)).await
    }

    async fn query(&self, limit: Option<u32>) -> Result<Vec<ConversionRecord>, ServiceError> {
        let db = self.db.clone();
        let rows = tokio::task::spawn_blocking(move || db.list_conversions(limit)).await??;
        Ok(rows.into_iter().map(record_from_row).collect())
    }
}

fn record_from_row(row: ConversionRow) -> ConversionRecord {
    let from_currency = parse_code(&row.from_currency, row.id);
    let to_currency = parse_code(&row.to_currency, row.id);

    ConversionRecord {
        id: row.id,
        amount: row.amount,
        from_currency,
        to_currency,
        converted_amount: row.converted_amount,
        timestamp: row.timestamp,
    }
}

fn parse_code(code: &str, record_id: i64) -> Currency {
    code.parse().unwrap_or_else(|_| {
        warn!(record_id, "corrupt currency code '{}' in ledger", code);
        Currency::Usd
    })
}
