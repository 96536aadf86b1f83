pub mod convert;
pub mod rates;

pub use convert::{convert, convert_lenient, Advisory, ConvertError, Quote};
pub use rates::{rate, rate_or_parity};
