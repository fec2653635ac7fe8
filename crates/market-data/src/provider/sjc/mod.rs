//! SJC (Saigon Jewelry Company) gold bar prices.

mod client;
mod models;

pub use client::SjcClient;
pub use models::{GoldQuote, QuoteSide, SjcGoldPrice, SjcResponse};
