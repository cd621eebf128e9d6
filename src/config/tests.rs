use super::{Settings, SettingsError};

use std::collections::HashMap;
use std::time::Duration;

use anyhow::Result;
use rust_decimal_macros::dec;

use crate::rates::DEFAULT_RATES_URL;

fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings, SettingsError> {
    let variables: HashMap<String, String> = pairs.iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    Settings::from_lookup(|name| variables.get(name).cloned())
}

#[test]
fn test_settings_default_without_environment() -> Result<()> {
    let settings = settings_from(&[])?;

    assert_eq!(settings.rates_url, DEFAULT_RATES_URL);
    assert!(settings.fallback_rates.is_empty());
    assert_eq!(settings.rates_timeout, Duration::from_secs(10));

    Ok(())
}

#[test]
fn test_settings_read_overrides() -> Result<()> {
    let settings = settings_from(&[
        ("COMMISSION_RATES_URL", "http://localhost:8080/latest"),
        ("COMMISSION_FALLBACK_RATES", "USD=1.1497,JPY=129.53"),
        ("COMMISSION_RATES_TIMEOUT_SECS", " 3 ")
    ])?;

    assert_eq!(settings.rates_url, "http://localhost:8080/latest");
    assert_eq!(settings.fallback_rates.get("JPY"), Some(dec!(129.53)));
    assert_eq!(settings.rates_timeout, Duration::from_secs(3));

    Ok(())
}

#[test]
fn test_settings_treat_blank_values_as_unset() -> Result<()> {
    let settings = settings_from(&[("COMMISSION_RATES_URL", "  "), ("COMMISSION_FALLBACK_RATES", "")])?;

    assert_eq!(settings.rates_url, DEFAULT_RATES_URL);
    assert!(settings.fallback_rates.is_empty());

    Ok(())
}

#[test]
fn test_settings_reject_invalid_values() {
    assert!(matches!(settings_from(&[("COMMISSION_FALLBACK_RATES", "USD:1.1")]), Err(SettingsError::FallbackRates(_))));
    assert!(matches!(settings_from(&[("COMMISSION_RATES_TIMEOUT_SECS", "soon")]), Err(SettingsError::Timeout(_))));
}
