use accrue_core::pricing::{GoldUnit, PriceOracle, PriceQuote};
use accrue_core::{Error, Result};
use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use crate::provider::sjc::{QuoteSide, SjcClient};

const ORACLE_ID: &str = "SJC";

/// Latest SJC gold bar price converted to a price per chi.
pub struct SjcGoldOracle {
    client: SjcClient,
    side: QuoteSide,
}

impl SjcGoldOracle {
    pub fn new() -> Self {
        Self::with_client(SjcClient::new(), QuoteSide::default())
    }

    pub fn with_client(client: SjcClient, side: QuoteSide) -> Self {
        Self { client, side }
    }
}

impl Default for SjcGoldOracle {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceOracle for SjcGoldOracle {
    fn id(&self) -> &'static str {
        ORACLE_ID
    }

    async fn latest_price(&self) -> Result<PriceQuote> {
        let quote = self.client.get_latest_quote().await?;
        let per_luong = quote.price(self.side);
        if per_luong <= Decimal::ZERO {
            return Err(Error::PriceUnavailable(format!(
                "SJC quote for {} has no {:?} price",
                quote.date, self.side
            )));
        }

        let per_chi = GoldUnit::Luong.price_per_chi(per_luong);
        debug!(
            "SJC {} ({}): {} per luong, {} per chi",
            quote.type_name, quote.date, per_luong, per_chi
        );
        Ok(PriceQuote::new(per_chi, ORACLE_ID))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_latest_price_is_per_chi() {
        let oracle = SjcGoldOracle::new();

        let quote = oracle.latest_price().await.unwrap();

        // A chi has cost between 1 and 50 million VND since 2016.
        assert!(quote.price_per_unit > Decimal::from(1_000_000));
        assert!(quote.price_per_unit < Decimal::from(50_000_000));
        assert_eq!(quote.source, "SJC");
    }

    #[tokio::test]
    async fn test_fetch_failure_is_price_unavailable() {
        let oracle = SjcGoldOracle::with_client(
            SjcClient::with_url("http://127.0.0.1:9/GoldPrice"),
            QuoteSide::Buy,
        );

        let err = oracle.latest_price().await.unwrap_err();

        assert!(matches!(err, Error::PriceUnavailable(_)));
    }
}
