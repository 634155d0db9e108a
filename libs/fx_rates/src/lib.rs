mod document;

pub use document::{CurrencyAmount, FxRate, FxRatesDocument, OperationalError};

use chrono::{NaiveDate, Utc};
use reqwest::Client;
use serde::Serialize;

pub const DEFAULT_BASE_URL: &str = "https://lb.lt/webservices/FxRates/FxRates.asmx";

/// Rate type requested from the service (official Bank of Lithuania rates).
const RATE_TYPE: &str = "LT";

#[derive(Debug, thiserror::Error)]
pub enum FxRatesError {
    #[error("Rate service request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid rate service response: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("{0}")]
    Operational(String),

    #[error("Rate service response has no FxRate record")]
    MissingRecord,

    #[error("Rate service response has no rate for {0}")]
    MissingRate(String),
}

/// Result of converting an amount with the day's rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub amount: f64,
    pub target_currency: String,
    pub conversion_amount: f64,
    pub rate: FxRate,
}

/// Turns a raw rate-service reply into a [`Conversion`] of `amount`.
pub fn convert(xml: &str, target_currency: &str, amount: f64) -> Result<Conversion, FxRatesError> {
    let rate = FxRatesDocument::parse(xml)?.into_rate()?;
    let quoted = rate
        .quoted()
        .ok_or_else(|| FxRatesError::MissingRate(target_currency.to_string()))?
        .amount;

    Ok(Conversion {
        amount,
        target_currency: target_currency.to_string(),
        conversion_amount: quoted * amount,
        rate,
    })
}

/// Client for the `FxRates` web service.
///
/// Every call is a single request: no retry, no cache.
#[derive(Debug, Clone)]
pub struct FxRatesClient {
    client: Client,
    base_url: String,
}

impl FxRatesClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn rates_url(&self) -> String {
        format!(
            "{}/getFxRatesForCurrency",
            self.base_url.trim_end_matches('/')
        )
    }

    /// Fetches the raw XML for `currency` on `date`.
    pub async fn fetch_rates(&self, currency: &str, date: NaiveDate) -> Result<String, FxRatesError> {
        let day = date.format("%Y-%m-%d").to_string();
        tracing::info!(currency, date = %day, "requesting fx rates");

        let body = self
            .client
            .get(self.rates_url())
            .query(&[
                ("tp", RATE_TYPE),
                ("ccy", currency),
                ("dtFrom", day.as_str()),
                ("dtTo", day.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        tracing::debug!(currency, body = %body, "fx rates response");
        Ok(body)
    }

    /// Converts `amount` using today's (UTC) rate for `target_currency`.
    pub async fn convert(&self, target_currency: &str, amount: f64) -> Result<Conversion, FxRatesError> {
        let today = Utc::now().date_naive();
        let xml = self.fetch_rates(target_currency, today).await?;
        convert(&xml, target_currency, amount)
    }
}

impl Default for FxRatesClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
