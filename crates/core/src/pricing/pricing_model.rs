//! Price quote models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price for one base denomination unit (one chi) of gold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub price_per_unit: Decimal,
    /// Identifier of the source that produced the price.
    pub source: String,
    pub fetched_at: DateTime<Utc>,
}

impl PriceQuote {
    pub fn new(price_per_unit: Decimal, source: impl Into<String>) -> Self {
        Self {
            price_per_unit,
            source: source.into(),
            fetched_at: Utc::now(),
        }
    }
}

/// Gold weight units used by Vietnamese dealers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoldUnit {
    /// Lượng (tael)
    Luong,
    /// Chỉ - 1/10 of Lượng, the base denomination
    Chi,
}

impl GoldUnit {
    /// Number of chi in one of this unit.
    pub fn chi_per_unit(&self) -> Decimal {
        match self {
            GoldUnit::Luong => Decimal::TEN,
            GoldUnit::Chi => Decimal::ONE,
        }
    }

    /// Converts a price quoted per `self` into a price per chi.
    pub fn price_per_chi(&self, price: Decimal) -> Decimal {
        price / self.chi_per_unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_per_chi_from_luong() {
        assert_eq!(GoldUnit::Luong.price_per_chi(dec!(34600000)), dec!(3460000));
        assert_eq!(GoldUnit::Chi.price_per_chi(dec!(3460000)), dec!(3460000));
    }
}
