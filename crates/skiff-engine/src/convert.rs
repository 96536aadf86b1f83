use std::fmt;

use serde::{Deserialize, Serialize};
use skiff_types::Currency;
use thiserror::Error;

use crate::rates;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("amount '{0}' is not a number")]
    InvalidAmount(String),
    #[error("no rate listed for {from}/{to}")]
    UnsupportedPair { from: Currency, to: Currency },
}

/// Heuristic one-liner derived from a conversion, shown next to the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advisory {
    /// The applied rate exceeded 1.2.
    HighRate,
    /// The converted amount exceeded 1000; carries the rendered amount.
    GoodProfit(String),
    Done,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::HighRate => f.write_str("High rate detected! Consider trading now!"),
            Advisory::GoodProfit(amount) => write!(f, "You made a good profit: {}", amount),
            Advisory::Done => f.write_str("Exchange done successfully."),
        }
    }
}

/// Result of one conversion: the applied rate, the converted amount both as
/// a number and rendered to two decimals, and the derived advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub amount: f64,
    pub rate: f64,
    pub converted: f64,
    pub converted_text: String,
    pub advisory: Advisory,
}

/// Convert `amount_text` from one currency to another.
///
/// Malformed amounts and unlisted pairs are reported as errors; use
/// [`convert_lenient`] for the degrade-to-default behavior the converter
/// screen expects.
pub fn convert(amount_text: &str, from: Currency, to: Currency) -> Result<Quote, ConvertError> {
    let amount: f64 = amount_text
        .trim()
        .parse()
        .map_err(|_| ConvertError::InvalidAmount(amount_text.to_string()))?;
    let rate = rates::rate(from, to).ok_or(ConvertError::UnsupportedPair { from, to })?;
    Ok(quote(amount, rate))
}

/// Lenient conversion: a non-numeric or empty amount is treated as 0.0 and
/// an unlisted pair as parity, so this never fails.
pub fn convert_lenient(amount_text: &str, from: Currency, to: Currency) -> Quote {
    let amount: f64 = amount_text.trim().parse().unwrap_or(0.0);
    quote(amount, rates::rate_or_parity(from, to))
}

fn quote(amount: f64, rate: f64) -> Quote {
    let converted = amount * rate;
    // Two fractional digits via standard formatting (round-half-to-even),
    // the one rendering rule used everywhere.
    let converted_text = format!("{converted:.2}");

    let advisory = if rate > 1.2 {
        Advisory::HighRate
    } else if converted > 1000.0 {
        Advisory::GoodProfit(converted_text.clone())
    } else {
        Advisory::Done
    };

    Quote {
        amount,
        rate,
        converted,
        converted_text,
        advisory,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Currency::*;

    #[test]
    fn converts_with_listed_rate() {
        let quote = convert("100", Usd, Eur).unwrap();
        assert_eq!(quote.converted_text, "93.00");
        assert_eq!(quote.advisory, Advisory::Done);
    }

    #[test]
    fn same_currency_is_identity() {
        let quote = convert("100", Usd, Usd).unwrap();
        assert_eq!(quote.converted_text, "100.00");
    }

    #[test]
    fn strict_path_rejects_bad_input() {
        assert_eq!(
            convert("abc", Usd, Eur),
            Err(ConvertError::InvalidAmount("abc".to_string()))
        );
        assert_eq!(
            convert("100", Eur, Gbp),
            Err(ConvertError::UnsupportedPair { from: Eur, to: Gbp })
        );
    }

    #[test]
    fn lenient_path_degrades_bad_input_to_zero() {
        assert_eq!(convert_lenient("abc", Usd, Eur).converted_text, "0.00");
        assert_eq!(convert_lenient("", Usd, Eur).converted_text, "0.00");
    }

    #[test]
    fn lenient_path_treats_unlisted_pair_as_parity() {
        let quote = convert_lenient("250", Eur, Gbp);
        assert_eq!(quote.rate, 1.0);
        assert_eq!(quote.converted_text, "250.00");
    }

    #[test]
    fn high_rate_advisory_wins_over_profit() {
        // USD->NGN is 1400: both the rate and the profit thresholds fire,
        // and the rate check takes priority.
        let quote = convert("100", Usd, Ngn).unwrap();
        assert_eq!(quote.converted_text, "140000.00");
        assert_eq!(quote.advisory, Advisory::HighRate);
        assert_eq!(
            quote.advisory.to_string(),
            "High rate detected! Consider trading now!"
        );
    }

    #[test]
    fn profit_advisory_below_rate_threshold() {
        // EUR->USD is 1.08: under the rate threshold, over the profit one.
        let quote = convert("1000", Eur, Usd).unwrap();
        assert_eq!(quote.advisory, Advisory::GoodProfit("1080.00".to_string()));
        assert_eq!(
            quote.advisory.to_string(),
            "You made a good profit: 1080.00"
        );
    }

    #[test]
    fn default_advisory_message() {
        let quote = convert("1", Usd, Gbp).unwrap();
        assert_eq!(quote.advisory.to_string(), "Exchange done successfully.");
    }

    #[test]
    fn whitespace_around_amount_is_accepted() {
        let quote = convert(" 42 ", Usd, Usd).unwrap();
        assert_eq!(quote.converted_text, "42.00");
    }
}
