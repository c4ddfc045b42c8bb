//! Defines the trait and implementation for external exchange-rate providers.

use crate::currency::Currency;
use crate::rate_table::RateTable;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// The public exchange-rate endpoint queried by the default provider.
pub const EXCHANGE_RATE_ENDPOINT: &str = "https://api.exchangerate-api.com/v4/latest";

/// An error produced while fetching rates.
///
/// The form does not distinguish failure causes; both variants surface to
/// the user as a single "rate fetch failed" message via `Display`.
#[derive(Error, Debug)]
pub enum RateFetchError {
    /// The rate service answered with a non-success HTTP status. The
    /// response body is not inspected in this case.
    #[error("rate service returned HTTP {0}")]
    Status(reqwest::StatusCode),
    /// The request could not be completed, or the body failed to parse.
    #[error("failed to fetch currency data: {0}")]
    Transport(#[from] reqwest::Error),
}

/// A trait for any service that can provide exchange rates for a base currency.
pub trait RateProvider {
    /// Fetches the latest rate table, with all rates relative to `base`.
    async fn latest_rates(&self, base: Currency) -> Result<RateTable, RateFetchError>;
}

/// The structure of the JSON response from the exchange-rate API.
///
/// Only the `rates` field is used; a response without one yields an
/// empty table rather than an error.
#[derive(Deserialize, Debug)]
struct LatestRatesResponse {
    #[serde(default)]
    rates: HashMap<String, f64>,
}

/// An implementation of [`RateProvider`] for the exchangerate-api.com service.
#[derive(Debug, Clone)]
pub struct ExchangeRateApi {
    base_url: String,
}

impl ExchangeRateApi {
    /// Creates a provider against a specific endpoint. Tests point this at
    /// a local mock server.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for ExchangeRateApi {
    fn default() -> Self {
        Self::new(EXCHANGE_RATE_ENDPOINT)
    }
}

impl RateProvider for ExchangeRateApi {
    async fn latest_rates(&self, base: Currency) -> Result<RateTable, RateFetchError> {
        let url = format!("{}/{}", self.base_url, base.code());

        let client = reqwest::Client::new();
        let resp = client.get(&url).send().await?;

        if !resp.status().is_success() {
            return Err(RateFetchError::Status(resp.status()));
        }

        let body = resp.json::<LatestRatesResponse>().await?;
        dioxus_logger::tracing::info!(
            base = base.code(),
            rates = body.rates.len(),
            "loaded exchange rates"
        );

        Ok(RateTable::from_raw(&body.rates))
    }
}
