use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::rates::{RateFetchError, RateTable};

pub const DEFAULT_RATES_URL: &str = "https://api.exchangeratesapi.io/latest?base=EUR";

/// Anything able to produce a fresh EUR based rate table.
pub trait RateSource {
    async fn fetch(&self) -> Result<RateTable, RateFetchError>;
}

#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>
}

/// Fetches rates from an HTTP endpoint answering `{"rates": {"USD": 1.1497, ...}}`.
pub struct HttpRateSource {
    client: Client,
    url: String
}

impl HttpRateSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, RateFetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            url: url.into()
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl RateSource for HttpRateSource {
    async fn fetch(&self) -> Result<RateTable, RateFetchError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateFetchError::Status(status));
        }

        let payload = response.json::<RatesResponse>().await.map_err(RateFetchError::malformed)?;

        let mut table = RateTable::new();

        for (currency, rate) in payload.rates {
            //NOTE: Going through the shortest display form keeps 1.1497 exact instead of its binary approximation
            let rate = Decimal::from_str(&rate.to_string())
                .map_err(|_| RateFetchError::invalid_rate(&currency, rate))?;

            table.insert(&currency, rate)?;
        }

        Ok(table)
    }
}
