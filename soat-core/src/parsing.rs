use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use thiserror::Error;

/// Error returned when a price field cannot be turned into whole currency units.
#[derive(Debug, Error)]
pub enum ParsePriceError {
    #[error("invalid price '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("price '{input}' does not fit in whole currency units")]
    OutOfRange { input: String },
}

/// Trims whitespace and removes commas (thousands separator).
fn normalize_price_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Rounds to the nearest whole unit, halves away from zero.
pub fn round_to_unit(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Parses a price field into whole currency units.
///
/// Empty or whitespace-only input is `Ok(None)`. Plain and scientific
/// notation are accepted (`"123.6"`, `"1.5e2"`).
pub fn parse_price(s: &str) -> Result<Option<i64>, ParsePriceError> {
    let normalized = normalize_price_input(s);
    if normalized.is_empty() {
        return Ok(None);
    }

    let value = normalized
        .parse::<Decimal>()
        .or_else(|e| Decimal::from_scientific(&normalized).map_err(|_| e))
        .map_err(|source| ParsePriceError::Invalid {
            input: s.to_string(),
            source,
        })?;

    round_to_unit(value)
        .to_i64()
        .map(Some)
        .ok_or_else(|| ParsePriceError::OutOfRange {
            input: s.to_string(),
        })
}

/// Like [`parse_price`], but any failure is logged and treated as "no quote".
pub fn coerce_price(s: &str) -> Option<i64> {
    parse_price(s).unwrap_or_else(|e| {
        tracing::warn!(input = %s, "price treated as declined: {}", e);
        None
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_price_rounds_to_nearest_unit() {
        assert_eq!(parse_price("123.6").unwrap(), Some(124));
        assert_eq!(parse_price("123.4").unwrap(), Some(123));
        assert_eq!(parse_price("123.5").unwrap(), Some(124));
    }

    #[test]
    fn parse_price_accepts_comma_thousands_separator() {
        assert_eq!(parse_price("1,234.56").unwrap(), Some(1235));
    }

    #[test]
    fn parse_price_trims_whitespace() {
        assert_eq!(parse_price("  80  ").unwrap(), Some(80));
    }

    #[test]
    fn parse_price_accepts_scientific_notation() {
        assert_eq!(parse_price("1.5e2").unwrap(), Some(150));
    }

    #[test]
    fn parse_price_empty_is_none() {
        assert_eq!(parse_price("").unwrap(), None);
        assert_eq!(parse_price("   ").unwrap(), None);
    }

    #[test]
    fn parse_price_invalid_returns_error() {
        assert!(matches!(
            parse_price("abc"),
            Err(ParsePriceError::Invalid { .. })
        ));
    }

    #[test]
    fn coerce_price_turns_garbage_into_none() {
        assert_eq!(coerce_price("12abc"), None);
        assert_eq!(coerce_price("S/ 50"), None);
        assert_eq!(coerce_price("50"), Some(50));
    }

    #[test]
    fn round_to_unit_halves_away_from_zero() {
        assert_eq!(round_to_unit(dec!(0.5)), dec!(1));
        assert_eq!(round_to_unit(dec!(-0.5)), dec!(-1));
        assert_eq!(round_to_unit(dec!(99.49)), dec!(99));
    }
}
