mod converter;
mod errors;
mod provider;
mod source;
mod table;

pub use converter::CurrencyConverter;
pub use errors::RateFetchError;
pub use provider::{FetchOutcome, RateProvider};
pub use source::{HttpRateSource, RateSource, DEFAULT_RATES_URL};
pub use table::RateTable;
