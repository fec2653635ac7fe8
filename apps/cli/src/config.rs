use std::path::PathBuf;
use std::time::Duration;

use accrue_core::pricing::parse_quoted_price;
use anyhow::Context;
use rust_decimal::Decimal;

const DEFAULT_DB_PATH: &str = "./db/accrue.db";
const DEFAULT_PRICE_CACHE_TTL_SECS: u64 = 3600;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub db_path: String,
    /// JSON array of categories; the built-in set is used when absent.
    pub categories_file: Option<PathBuf>,
    /// Fixed price per chi, bypassing the SJC oracle.
    pub price_override: Option<Decimal>,
    pub price_cache_ttl: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let price_override = non_empty("ACCRUE_PRICE_OVERRIDE")
            .map(|raw| {
                parse_quoted_price(&raw, Decimal::ONE)
                    .with_context(|| format!("Invalid ACCRUE_PRICE_OVERRIDE: {}", raw))
            })
            .transpose()?;

        let ttl_secs = non_empty("ACCRUE_PRICE_CACHE_TTL_SECS")
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("ACCRUE_PRICE_CACHE_TTL_SECS is invalid: {}", raw))
            })
            .transpose()?
            .unwrap_or(DEFAULT_PRICE_CACHE_TTL_SECS);

        Ok(Self {
            db_path: non_empty("ACCRUE_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
            categories_file: non_empty("ACCRUE_CATEGORIES_FILE").map(PathBuf::from),
            price_override,
            price_cache_ttl: Duration::from_secs(ttl_secs),
        })
    }
}
