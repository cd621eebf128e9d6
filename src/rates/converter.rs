use rust_decimal::Decimal;

use crate::rates::RateTable;
use crate::types::EUR;

/// Converts amounts to and from EUR using a snapshot of the rate table.
///
/// Currencies without a known rate are treated as 1:1 with EUR. Both
/// directions return `None` when the result does not fit a `Decimal`.
#[derive(Debug, Clone)]
pub struct CurrencyConverter {
    rates: RateTable
}

impl CurrencyConverter {
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    pub fn convert_to_eur(&self, amount: Decimal, currency: &str) -> Option<Decimal> {
        if currency == EUR {
            return Some(amount);
        }

        match self.rates.get(currency) {
            Some(rate) => amount.checked_div(rate),
            None => Some(amount)
        }
    }

    pub fn convert_from_eur(&self, amount_eur: Decimal, currency: &str) -> Option<Decimal> {
        if currency == EUR {
            return Some(amount_eur);
        }

        match self.rates.get(currency) {
            Some(rate) => amount_eur.checked_mul(rate),
            None => Some(amount_eur)
        }
    }
}
