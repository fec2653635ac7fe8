//! Parsing of dealer price strings such as `"17,300"`.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::errors::{Error, Result};

/// Parses a quoted price, dropping `,` thousands separators and whitespace,
/// and scales it by `multiplier` (e.g. 1000 for quotes in thousand VND).
///
/// Empty, unparsable or non-positive prices are reported as
/// `PriceUnavailable`.
pub fn parse_quoted_price(raw: &str, multiplier: Decimal) -> Result<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return Err(Error::PriceUnavailable("empty price quote".to_string()));
    }

    let value = Decimal::from_str(&cleaned).map_err(|e| {
        Error::PriceUnavailable(format!("unparsable price quote '{}': {}", raw, e))
    })?;
    let price = value * multiplier;

    if price <= Decimal::ZERO {
        return Err(Error::PriceUnavailable(format!(
            "non-positive price quote '{}'",
            raw
        )));
    }

    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_thousands_quote() {
        assert_eq!(
            parse_quoted_price("17,300", dec!(1000)).unwrap(),
            dec!(17300000)
        );
    }

    #[test]
    fn test_parse_plain_quote() {
        assert_eq!(
            parse_quoted_price(" 3460000 ", Decimal::ONE).unwrap(),
            dec!(3460000)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_quoted_price("n/a", Decimal::ONE),
            Err(Error::PriceUnavailable(_))
        ));
        assert!(matches!(
            parse_quoted_price("", Decimal::ONE),
            Err(Error::PriceUnavailable(_))
        ));
        assert!(matches!(
            parse_quoted_price("0", Decimal::ONE),
            Err(Error::PriceUnavailable(_))
        ));
    }
}
