pub mod auth;
pub mod balance;
pub mod config;
pub mod convert;
pub mod error;
pub mod ledger;
pub mod telemetry;

pub use auth::AuthService;
pub use balance::Balance;
pub use config::Config;
pub use convert::Converter;
pub use error::ServiceError;
pub use ledger::Ledger;

use std::sync::Arc;

use skiff_db::Database;

/// Everything the embedding shell needs, wired to one storage context.
pub struct App {
    pub auth: AuthService,
    pub converter: Converter,
    pub ledger: Ledger,
    pub balance: Balance,
}

impl App {
    /// Wire every service to an already-open database.
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            auth: AuthService::new(db.clone()),
            converter: Converter::new(db.clone()),
            ledger: Ledger::new(db.clone()),
            balance: Balance::new(db),
        }
    }

    /// Open the database named by `config` and wire the services to it.
    pub fn open(config: &Config) -> Result<Self, ServiceError> {
        let db = Database::open(&config.db_path)?;
        Ok(Self::new(Arc::new(db)))
    }
}
