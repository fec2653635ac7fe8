use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use accrue_core::pricing::PriceOracle;
use accrue_core::{default_categories, validate_categories, AccumulationService, Category};
use accrue_market_data::{CachedPriceOracle, FixedPriceOracle, SjcGoldOracle};
use accrue_storage_sqlite::SqliteLedgerStore;

use crate::config::Config;

/// Logs go to stderr so command output on stdout stays clean.
pub fn init_tracing() {
    let log_format = std::env::var("ACCRUE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Categories from `path`, or the built-in set.
pub fn load_categories(path: Option<&Path>) -> anyhow::Result<Vec<Category>> {
    let Some(path) = path else {
        return Ok(default_categories());
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read categories file {}", path.display()))?;
    let categories: Vec<Category> = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid categories file {}", path.display()))?;
    validate_categories(&categories)?;
    tracing::info!(
        "Loaded {} categories from {}",
        categories.len(),
        path.display()
    );
    Ok(categories)
}

pub fn build_price_oracle(config: &Config) -> Arc<dyn PriceOracle> {
    match config.price_override {
        Some(price) => {
            tracing::info!("Using fixed gold price {} per chi", price);
            Arc::new(FixedPriceOracle::new(price))
        }
        None => Arc::new(CachedPriceOracle::with_ttl(
            SjcGoldOracle::new(),
            config.price_cache_ttl,
        )),
    }
}

pub fn build_service(
    config: &Config,
    price_oracle: Arc<dyn PriceOracle>,
) -> anyhow::Result<AccumulationService> {
    let store = SqliteLedgerStore::open(&config.db_path)?;
    let service = AccumulationService::load(Arc::new(store), price_oracle)?;
    Ok(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_default_categories() {
        assert_eq!(load_categories(None).unwrap(), default_categories());
    }

    #[test]
    fn test_loads_categories_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": "stocks", "name": "Stocks", "percentage": 60}},
                {{"id": "gold", "name": "Gold", "weightPercent": 40}}
            ]"#
        )
        .unwrap();

        let categories = load_categories(Some(file.path())).unwrap();

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].weight_percent, dec!(60));
        assert_eq!(categories[1].weight_percent, dec!(40));
    }

    #[test]
    fn test_rejects_invalid_categories_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": "gold", "name": "Gold", "percentage": 50}},
                {{"id": "gold", "name": "Gold again", "percentage": 50}}
            ]"#
        )
        .unwrap();

        assert!(load_categories(Some(file.path())).is_err());
    }

    #[tokio::test]
    async fn test_override_builds_fixed_oracle() {
        let config = Config {
            db_path: "unused.db".to_string(),
            categories_file: None,
            price_override: Some(dec!(3460000)),
            price_cache_ttl: std::time::Duration::from_secs(1),
        };

        let quote = build_price_oracle(&config).latest_price().await.unwrap();

        assert_eq!(quote.price_per_unit, dec!(3460000));
    }
}
