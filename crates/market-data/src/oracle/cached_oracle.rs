//! TTL cache in front of a price oracle, using moka

use std::time::Duration;

use accrue_core::pricing::{PriceOracle, PriceQuote};
use accrue_core::Result;
use async_trait::async_trait;
use log::debug;
use moka::future::Cache;

/// One hour.
pub const DEFAULT_PRICE_TTL: Duration = Duration::from_secs(3600);

/// Serves the last successful quote of `inner` until it expires.
///
/// Failures are passed through and never cached, so the next call after an
/// error goes back to `inner`.
pub struct CachedPriceOracle<O> {
    inner: O,
    cache: Cache<&'static str, PriceQuote>,
}

impl<O: PriceOracle> CachedPriceOracle<O> {
    pub fn new(inner: O) -> Self {
        Self::with_ttl(inner, DEFAULT_PRICE_TTL)
    }

    pub fn with_ttl(inner: O, ttl: Duration) -> Self {
        Self {
            inner,
            cache: Cache::builder().time_to_live(ttl).max_capacity(1).build(),
        }
    }

    /// Drops the cached quote; the next call fetches a fresh one.
    pub fn invalidate(&self) {
        self.cache.invalidate_all();
    }
}

#[async_trait]
impl<O: PriceOracle> PriceOracle for CachedPriceOracle<O> {
    fn id(&self) -> &'static str {
        self.inner.id()
    }

    async fn latest_price(&self) -> Result<PriceQuote> {
        let key = self.inner.id();
        if let Some(quote) = self.cache.get(&key).await {
            debug!("Price cache hit for {}", key);
            return Ok(quote);
        }

        let quote = self.inner.latest_price().await?;
        self.cache.insert(key, quote.clone()).await;
        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accrue_core::Error;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Fails the first `failures` calls, then succeeds.
    struct CountingOracle {
        calls: Arc<AtomicUsize>,
        failures: usize,
    }

    #[async_trait]
    impl PriceOracle for CountingOracle {
        fn id(&self) -> &'static str {
            "COUNTING"
        }

        async fn latest_price(&self) -> Result<PriceQuote> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                return Err(Error::PriceUnavailable("upstream down".to_string()));
            }
            Ok(PriceQuote::new(dec!(3460000), self.id()))
        }
    }

    fn oracle(failures: usize) -> (CachedPriceOracle<CountingOracle>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let inner = CountingOracle {
            calls: calls.clone(),
            failures,
        };
        (CachedPriceOracle::new(inner), calls)
    }

    #[tokio::test]
    async fn test_second_call_is_served_from_cache() {
        let (oracle, calls) = oracle(0);

        let first = oracle.latest_price().await.unwrap();
        let second = oracle.latest_price().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let (oracle, calls) = oracle(1);

        assert!(oracle.latest_price().await.is_err());
        assert!(oracle.latest_price().await.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let (oracle, calls) = oracle(0);

        oracle.latest_price().await.unwrap();
        oracle.invalidate();
        oracle.latest_price().await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_expired_quote_is_refetched() {
        let calls = Arc::new(AtomicUsize::new(0));
        let oracle = CachedPriceOracle::with_ttl(
            CountingOracle {
                calls: calls.clone(),
                failures: 0,
            },
            Duration::from_millis(50),
        );

        oracle.latest_price().await.unwrap();
        tokio::time::sleep(Duration::from_millis(120)).await;
        oracle.latest_price().await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
