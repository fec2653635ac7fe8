use async_trait::async_trait;

use super::pricing_model::PriceQuote;
use crate::errors::Result;

/// Source of the current gold price per base denomination unit.
///
/// Implementations report any failure as `Error::PriceUnavailable`. The
/// engine never retries; retry is left to the caller.
#[async_trait]
pub trait PriceOracle: Send + Sync {
    /// Short identifier used in logs and quotes.
    fn id(&self) -> &'static str;

    async fn latest_price(&self) -> Result<PriceQuote>;
}
