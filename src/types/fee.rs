use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::fmt::{Display, Formatter};

const CENT_PLACES: u32 = 2;

/// A commission fee, always rounded up to the next cent.
///
/// Displays as the literal `0` when nothing is owed and as a two decimal
/// fixed point value otherwise.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct Fee(Decimal);

impl Fee {
    /// Rounds a raw commission amount in the provider's favour.
    pub fn round_up(raw: Decimal) -> Self {
        Fee(raw.round_dp_with_strategy(CENT_PLACES, RoundingStrategy::ToPositiveInfinity))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Display for Fee {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(formatter, "0");
        }

        write!(formatter, "{:.width$}", self.0, width = CENT_PLACES as usize)
    }
}
