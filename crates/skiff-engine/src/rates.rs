use skiff_types::Currency;
use tracing::warn;

/// Conversion factor for a listed ordered pair. Only USD crosses are
/// listed; everything else is unsupported.
fn listed(from: Currency, to: Currency) -> Option<f64> {
    use Currency::*;

    let factor = match (from, to) {
        (Usd, Eur) => 0.93,
        (Usd, Kes) => 130.0,
        (Usd, Gbp) => 0.80,
        (Usd, Jpy) => 150.0,
        (Usd, Ngn) => 1400.0,
        (Eur, Usd) => 1.08,
        (Kes, Usd) => 0.0077,
        (Gbp, Usd) => 1.25,
        (Jpy, Usd) => 0.0067,
        (Ngn, Usd) => 0.000_71,
        _ => return None,
    };
    Some(factor)
}

/// Conversion factor from `from` to `to`.
///
/// A same-currency pair is always 1.0, whether or not it is listed. An
/// unlisted cross pair returns `None` so the caller can decide whether to
/// surface it or fall back.
pub fn rate(from: Currency, to: Currency) -> Option<f64> {
    if from == to {
        return Some(1.0);
    }
    listed(from, to)
}

/// Lenient view of [`rate`]: unlisted pairs fall back to parity. The
/// fallback is logged so it stays observable.
pub fn rate_or_parity(from: Currency, to: Currency) -> f64 {
    match rate(from, to) {
        Some(factor) => factor,
        None => {
            warn!(%from, %to, "no listed rate for pair, falling back to parity");
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Currency::*;

    #[test]
    fn same_currency_is_always_parity() {
        for currency in skiff_types::CURRENCIES {
            assert_eq!(rate(currency, currency), Some(1.0));
        }
    }

    #[test]
    fn listed_pairs_resolve() {
        assert_eq!(rate(Usd, Eur), Some(0.93));
        assert_eq!(rate(Ngn, Usd), Some(0.000_71));
        assert_eq!(rate(Usd, Ngn), Some(1400.0));
    }

    #[test]
    fn unlisted_cross_pair_is_none() {
        assert_eq!(rate(Eur, Gbp), None);
        assert_eq!(rate(Kes, Ngn), None);
    }

    #[test]
    fn parity_fallback_for_unlisted_pair() {
        assert_eq!(rate_or_parity(Eur, Gbp), 1.0);
        assert_eq!(rate_or_parity(Usd, Eur), 0.93);
    }
}
