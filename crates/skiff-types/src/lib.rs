pub mod currency;
pub mod models;

pub use currency::{Currency, ParseCurrencyError, CURRENCIES};
pub use models::{ConversionRecord, NewUser, ParseRoleError, Role, User};
