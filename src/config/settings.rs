use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::rates::{RateFetchError, RateTable, DEFAULT_RATES_URL};

pub const RATES_URL_VAR: &str = "COMMISSION_RATES_URL";
pub const FALLBACK_RATES_VAR: &str = "COMMISSION_FALLBACK_RATES";
pub const RATES_TIMEOUT_VAR: &str = "COMMISSION_RATES_TIMEOUT_SECS";

const DEFAULT_RATES_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("COMMISSION_FALLBACK_RATES is invalid: {0}")]
    FallbackRates(#[source] RateFetchError),
    #[error("COMMISSION_RATES_TIMEOUT_SECS must be a whole number of seconds, found '{0}'")]
    Timeout(String)
}

/// Runtime settings resolved from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Endpoint queried once for EUR based rates.
    pub rates_url: String,
    /// Table used when the endpoint cannot be reached.
    pub fallback_rates: RateTable,
    pub rates_timeout: Duration
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves settings through `lookup`, treating blank values as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let rates_url = lookup(RATES_URL_VAR).unwrap_or_else(|| DEFAULT_RATES_URL.to_string());

        let fallback_rates = match lookup(FALLBACK_RATES_VAR) {
            Some(value) => RateTable::from_str(&value).map_err(SettingsError::FallbackRates)?,
            None => RateTable::new()
        };

        let rates_timeout = match lookup(RATES_TIMEOUT_VAR) {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(seconds) => Duration::from_secs(seconds),
                Err(_) => return Err(SettingsError::Timeout(value))
            },
            None => Duration::from_secs(DEFAULT_RATES_TIMEOUT_SECS)
        };

        Ok(Self {
            rates_url,
            fallback_rates,
            rates_timeout
        })
    }
}
