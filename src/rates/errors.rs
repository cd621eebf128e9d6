use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RateFetchError {
    #[error("Rate request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Rate source answered with status [{0}]")]
    Status(StatusCode),
    #[error("Rate response is malformed: {0}")]
    Malformed(String),
    #[error("Invalid rate [{rate}] for currency [{currency}]")]
    InvalidRate {
        currency: String,
        rate: String
    }
}

impl RateFetchError {
    pub fn malformed(reason: impl ToString) -> Self {
        Self::Malformed(reason.to_string())
    }

    pub fn invalid_rate(currency: &str, rate: impl ToString) -> Self {
        Self::InvalidRate { currency: currency.to_string(), rate: rate.to_string() }
    }
}
