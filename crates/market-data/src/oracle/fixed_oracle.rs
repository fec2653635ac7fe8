use accrue_core::pricing::{PriceOracle, PriceQuote};
use accrue_core::{Error, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Always answers with the same price per chi.
#[derive(Debug, Clone, Copy)]
pub struct FixedPriceOracle {
    price_per_unit: Decimal,
}

impl FixedPriceOracle {
    pub fn new(price_per_unit: Decimal) -> Self {
        Self { price_per_unit }
    }
}

#[async_trait]
impl PriceOracle for FixedPriceOracle {
    fn id(&self) -> &'static str {
        "FIXED"
    }

    async fn latest_price(&self) -> Result<PriceQuote> {
        if self.price_per_unit <= Decimal::ZERO {
            return Err(Error::PriceUnavailable(format!(
                "fixed price must be positive, got {}",
                self.price_per_unit
            )));
        }
        Ok(PriceQuote::new(self.price_per_unit, self.id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_returns_configured_price() {
        let quote = FixedPriceOracle::new(dec!(3460000))
            .latest_price()
            .await
            .unwrap();
        assert_eq!(quote.price_per_unit, dec!(3460000));
        assert_eq!(quote.source, "FIXED");
    }

    #[tokio::test]
    async fn test_non_positive_price_is_unavailable() {
        let err = FixedPriceOracle::new(Decimal::ZERO)
            .latest_price()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::PriceUnavailable(_)));
    }
}
