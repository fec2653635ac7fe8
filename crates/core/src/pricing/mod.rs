//! Pricing module - price quotes, unit conversion and the price oracle seam.

mod pricing_model;
mod pricing_traits;
mod quote_parser;

pub use pricing_model::{GoldUnit, PriceQuote};
pub use pricing_traits::PriceOracle;
pub use quote_parser::parse_quoted_price;
