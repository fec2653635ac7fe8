//! Accrue Market Data Crate
//!
//! Price oracles that feed the accumulation engine with the current gold
//! price per chi.
//!
//! # Overview
//!
//! - [`SjcGoldOracle`] - today's SJC gold bar price, falling back to the most
//!   recent trading day
//! - [`FixedPriceOracle`] - a constant price, for overrides and tests
//! - [`CachedPriceOracle`] - wraps any oracle with a TTL cache
//!
//! ```text
//! AccumulationService --> CachedPriceOracle --> SjcGoldOracle --> SjcClient --> sjc.com.vn
//! ```

pub mod errors;
pub mod oracle;
pub mod provider;

pub use errors::MarketDataError;
pub use oracle::{CachedPriceOracle, FixedPriceOracle, SjcGoldOracle, DEFAULT_PRICE_TTL};
pub use provider::sjc::{QuoteSide, SjcClient};
