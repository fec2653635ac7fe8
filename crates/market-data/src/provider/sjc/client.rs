//! SJC gold price service client

use chrono::{Datelike, NaiveDate, Utc};
use log::{debug, warn};
use reqwest::Client;
use std::time::Duration;

use super::models::{GoldQuote, SjcGoldPrice, SjcResponse};
use crate::errors::MarketDataError;
use crate::provider::headers::sjc_headers;

const SJC_URL: &str = "https://sjc.com.vn/GoldPrice/Services/PriceService.ashx";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const SYMBOL: &str = "SJC";

/// Days to look back for the latest quote (weekends and holidays have none).
const LOOKBACK_DAYS: i64 = 7;

/// SJC publishes history from this date on.
const MIN_DATE: (i32, u32, u32) = (2016, 1, 2);

#[derive(Clone)]
pub struct SjcClient {
    client: Client,
    url: String,
}

impl SjcClient {
    pub fn new() -> Self {
        Self::with_url(SJC_URL)
    }

    /// Client posting to a different price service endpoint.
    pub fn with_url(url: impl Into<String>) -> Self {
        let client = Client::builder()
            .default_headers(sjc_headers())
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            url: url.into(),
        }
    }

    /// Gold bar price for `date` (must be on or after 2016-01-02).
    pub async fn get_gold_price(&self, date: NaiveDate) -> Result<SjcGoldPrice, MarketDataError> {
        let min_date = NaiveDate::from_ymd_opt(MIN_DATE.0, MIN_DATE.1, MIN_DATE.2)
            .ok_or_else(|| MarketDataError::InvalidDate("bad minimum date".to_string()))?;
        if date < min_date {
            return Err(MarketDataError::InvalidDate(format!(
                "SJC data is only available from {}",
                min_date
            )));
        }

        let body = format!(
            "method=GetSJCGoldPriceByDate&toDate={}",
            date.format("%d/%m/%Y")
        );
        let response = self.client.post(&self.url).body(body).send().await?;

        if !response.status().is_success() {
            return Err(MarketDataError::ApiError(format!(
                "SJC request failed: {}",
                response.status()
            )));
        }

        let result: SjcResponse = response
            .json()
            .await
            .map_err(|e| MarketDataError::ParseError(e.to_string()))?;

        if !result.success {
            return Err(MarketDataError::NoData {
                symbol: SYMBOL.to_string(),
                date: date.to_string(),
            });
        }

        // The first row is the standard SJC bar.
        result
            .data
            .into_iter()
            .next()
            .ok_or_else(|| MarketDataError::NoData {
                symbol: SYMBOL.to_string(),
                date: date.to_string(),
            })
    }

    /// Latest available quote, walking back over recent weekdays.
    pub async fn get_latest_quote(&self) -> Result<GoldQuote, MarketDataError> {
        let today = Utc::now().date_naive();

        for days_back in 0..LOOKBACK_DAYS {
            let date = today - chrono::Duration::days(days_back);
            if date.weekday().num_days_from_monday() >= 5 {
                continue;
            }

            match self.get_gold_price(date).await {
                Ok(price) => return Ok(GoldQuote::from_sjc(date, &price)),
                Err(MarketDataError::NoData { .. }) => {
                    debug!("No SJC gold data for {}", date);
                }
                Err(e) => {
                    warn!("Error fetching SJC gold price for {}: {}", date, e);
                }
            }
        }

        Err(MarketDataError::NoData {
            symbol: SYMBOL.to_string(),
            date: "recent".to_string(),
        })
    }
}

impl Default for SjcClient {
    fn default() -> Self {
        Self::new()
    }
}
