//! Gold price models for the SJC price service

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Response envelope from the SJC price service
#[derive(Debug, Clone, Deserialize)]
pub struct SjcResponse {
    pub success: bool,

    #[serde(default)]
    pub data: Vec<SjcGoldPrice>,
}

/// One gold product row, priced per lượng.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SjcGoldPrice {
    /// Gold type name (e.g., "Vàng SJC 1L, 10L, 1KG")
    pub type_name: String,

    pub branch_name: String,

    /// Price the dealer pays, in VND
    pub buy_value: f64,

    /// Price the dealer charges, in VND
    pub sell_value: f64,
}

impl SjcGoldPrice {
    pub fn buy_price(&self) -> Decimal {
        Decimal::from_f64_retain(self.buy_value).unwrap_or_default()
    }

    pub fn sell_price(&self) -> Decimal {
        Decimal::from_f64_retain(self.sell_value).unwrap_or_default()
    }
}

/// Which side of the dealer's quote to use as the unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteSide {
    /// Dealer buy price. Used for accumulation sizing.
    #[default]
    Buy,
    Sell,
}

/// A dated SJC quote, prices per lượng.
#[derive(Debug, Clone, PartialEq)]
pub struct GoldQuote {
    pub date: NaiveDate,
    pub type_name: String,
    pub buy_price: Decimal,
    pub sell_price: Decimal,
}

impl GoldQuote {
    pub fn from_sjc(date: NaiveDate, sjc: &SjcGoldPrice) -> Self {
        Self {
            date,
            type_name: sjc.type_name.clone(),
            buy_price: sjc.buy_price(),
            sell_price: sjc.sell_price(),
        }
    }

    /// Price on `side`, falling back to the other side when it is missing.
    pub fn price(&self, side: QuoteSide) -> Decimal {
        let (primary, fallback) = match side {
            QuoteSide::Buy => (self.buy_price, self.sell_price),
            QuoteSide::Sell => (self.sell_price, self.buy_price),
        };
        if primary > Decimal::ZERO {
            primary
        } else {
            fallback
        }
    }
}
