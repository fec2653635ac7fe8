//! [`PriceOracle`](accrue_core::pricing::PriceOracle) implementations.

mod cached_oracle;
mod fixed_oracle;
mod sjc_oracle;

pub use cached_oracle::{CachedPriceOracle, DEFAULT_PRICE_TTL};
pub use fixed_oracle::FixedPriceOracle;
pub use sjc_oracle::SjcGoldOracle;
