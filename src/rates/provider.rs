use crate::rates::{RateFetchError, RateSource, RateTable};

/// How the provider ended up with its current table.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The fetched table replaced the starter table.
    Fetched { currencies: usize },
    /// The starter table was kept.
    Fallback(RateFetchError)
}

/// Holds the rate table for the lifetime of the process.
///
/// A single fetch is attempted when the provider is initialised; there is
/// no retry and no refresh afterwards.
#[derive(Debug, Clone)]
pub struct RateProvider {
    rates: RateTable
}

impl RateProvider {
    /// Tries `source` once and falls back to `starter` on any failure.
    pub async fn initialize<S: RateSource>(source: &S, starter: RateTable) -> (Self, FetchOutcome) {
        match source.fetch().await {
            Ok(rates) => {
                let currencies = rates.len();
                (Self { rates }, FetchOutcome::Fetched { currencies })
            },
            Err(error) => (Self { rates: starter }, FetchOutcome::Fallback(error))
        }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }
}
