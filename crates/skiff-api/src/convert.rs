use std::sync::Arc;

use chrono::Local;
use tokio::sync::broadcast;
use tracing::{debug, error};

use skiff_db::Database;
use skiff_engine::{convert_lenient, ConvertError, Quote};
use skiff_types::{ConversionRecord, Currency};

/// Ledger timestamps are local wall-clock time at second precision.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How many records a live subscriber can fall behind before it starts
/// seeing `Lagged`.
const SUBSCRIBER_BUFFER: usize = 64;

/// Computes quotes and records every conversion in the audit ledger.
///
/// The quote is returned synchronously; the durable append runs as a
/// detached task so a storage failure can never block or fail the
/// conversion itself. Append failures are logged, not propagated.
#[derive(Clone)]
pub struct Converter {
    db: Arc<Database>,
    live: broadcast::Sender<ConversionRecord>,
}

impl Converter {
    pub fn new(db: Arc<Database>) -> Self {
        let (live, _) = broadcast::channel(SUBSCRIBER_BUFFER);
        Self { db, live }
    }

    /// Convert `amount_text` and append an audit record in the background.
    ///
    /// Malformed amounts degrade to 0.0 and unlisted pairs to parity, so
    /// this never fails. Must be called from within a Tokio runtime; the
    /// append is spawned onto it.
    pub fn convert(&self, amount_text: &str, from: Currency, to: Currency) -> Quote {
        let quote = convert_lenient(amount_text, from, to);
        self.record(amount_text, from, to, &quote);
        quote
    }

    /// Strict variant: malformed amounts and unlisted pairs are reported
    /// to the caller instead of degrading. Successful conversions are
    /// still recorded.
    pub fn try_convert(
        &self,
        amount_text: &str,
        from: Currency,
        to: Currency,
    ) -> Result<Quote, ConvertError> {
        let quote = skiff_engine::convert(amount_text, from, to)?;
        self.record(amount_text, from, to, &quote);
        Ok(quote)
    }

    /// Subscribe to conversions as they are durably recorded. Records are
    /// broadcast only after the insert succeeds, carrying their assigned
    /// id, so the feed matches the table's order.
    pub fn subscribe(&self) -> broadcast::Receiver<ConversionRecord> {
        self.live.subscribe()
    }

    fn record(&self, amount_text: &str, from: Currency, to: Currency, quote: &Quote) {
        let db = self.db.clone();
        let live = self.live.clone();
        let amount = amount_text.to_string();
        let converted = quote.converted_text.clone();
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();

        tokio::spawn(async move {
            let inserted = {
                let amount = amount.clone();
                let converted = converted.clone();
                let timestamp = timestamp.clone();
                tokio::task::spawn_blocking(move || {
                    db.insert_conversion(
                        &amount,
                        from.as_str(),
                        to.as_str(),
                        &converted,
                        &timestamp,
                    )
                })
                .await
            };

            match inserted {
                Ok(Ok(id)) => {
                    debug!(id, %from, %to, "conversion recorded");
                    // No receivers is fine; the send result is irrelevant.
                    let _ = live.send(ConversionRecord {
                        id,
                        amount,
                        from_currency: from,
                        to_currency: to,
                        converted_amount: converted,
                        timestamp,
                    });
                }
                Ok(Err(e)) => error!("failed to record conversion: {}", e),
                Err(e) => error!("conversion recorder task failed: {}", e),
            }
        });
    }
}
