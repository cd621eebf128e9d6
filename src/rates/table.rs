use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::rates::RateFetchError;
use crate::types::EUR;

/// Units of each currency per 1 EUR. EUR itself is implicit and never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    rates: HashMap<String, Decimal>
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a rate; EUR entries and non-positive rates are rejected.
    pub fn insert(&mut self, currency: &str, rate: Decimal) -> Result<(), RateFetchError> {
        if rate <= Decimal::ZERO {
            return Err(RateFetchError::invalid_rate(currency, rate));
        }

        if currency != EUR {
            self.rates.insert(currency.to_string(), rate);
        }

        Ok(())
    }

    pub fn get(&self, currency: &str) -> Option<Decimal> {
        self.rates.get(currency).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl FromStr for RateTable {
    type Err = RateFetchError;

    /// Parses `CODE=rate` pairs separated by commas, e.g. `USD=1.1497,JPY=129.53`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut table = RateTable::new();

        for pair in value.split(',').map(str::trim).filter(|pair| !pair.is_empty()) {
            let (currency, rate) = pair.split_once('=')
                .ok_or_else(|| RateFetchError::malformed(format!("expected CODE=rate, found '{pair}'")))?;

            let currency = currency.trim();
            let rate = Decimal::from_str(rate.trim())
                .map_err(|_| RateFetchError::invalid_rate(currency, rate.trim()))?;

            table.insert(currency, rate)?;
        }

        Ok(table)
    }
}

impl<const N: usize> TryFrom<[(&str, Decimal); N]> for RateTable {
    type Error = RateFetchError;

    fn try_from(pairs: [(&str, Decimal); N]) -> Result<Self, Self::Error> {
        let mut table = RateTable::new();

        for (currency, rate) in pairs {
            table.insert(currency, rate)?;
        }

        Ok(table)
    }
}
