use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of currencies the app trades between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Kes,
    Gbp,
    Jpy,
    Ngn,
}

/// Display order for currency pickers in the shell.
pub const CURRENCIES: [Currency; 6] = [
    Currency::Usd,
    Currency::Eur,
    Currency::Kes,
    Currency::Gbp,
    Currency::Jpy,
    Currency::Ngn,
];

impl Currency {
    pub fn as_str(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Kes => "KES",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Ngn => "NGN",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCurrencyError(pub String);

impl fmt::Display for ParseCurrencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown currency code '{}'", self.0)
    }
}

impl std::error::Error for ParseCurrencyError {}

impl FromStr for Currency {
    type Err = ParseCurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "KES" => Ok(Currency::Kes),
            "GBP" => Ok(Currency::Gbp),
            "JPY" => Ok(Currency::Jpy),
            "NGN" => Ok(Currency::Ngn),
            _ => Err(ParseCurrencyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for currency in CURRENCIES {
            assert_eq!(currency.as_str().parse::<Currency>(), Ok(currency));
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert!("CHF".parse::<Currency>().is_err());
        assert!("usd".parse::<Currency>().is_err());
        assert!("".parse::<Currency>().is_err());
    }
}
