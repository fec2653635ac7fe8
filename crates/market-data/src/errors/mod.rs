//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur when fetching gold prices.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// No data available for the requested symbol/date
    #[error("No data available for {symbol} on {date}")]
    NoData { symbol: String, date: String },

    /// Failed to parse API response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// API returned an error
    #[error("API error: {0}")]
    ApiError(String),

    /// Invalid date format or range
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

impl From<MarketDataError> for accrue_core::Error {
    fn from(err: MarketDataError) -> Self {
        accrue_core::Error::PriceUnavailable(err.to_string())
    }
}
