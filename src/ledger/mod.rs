mod weekly_ledger;

use rust_decimal::Decimal;

use crate::types::UserId;

pub use weekly_ledger::{WeekKey, WeeklyLedger, WeeklyUsage};

/// Per user, per ISO week withdrawal bookkeeping for the private free allowance.
pub trait Ledger {
    /// Current usage, or an empty usage if nothing was recorded yet.
    fn get(&self, user_id: UserId, week: WeekKey) -> WeeklyUsage;
    /// Adds `delta_eur` to the total and `increment_count` to the count, creating the entry if absent.
    fn update(&mut self, user_id: UserId, week: WeekKey, delta_eur: Decimal, increment_count: u32);
    /// Overwrites the total, creating the entry if absent.
    fn set_total(&mut self, user_id: UserId, week: WeekKey, total_eur: Decimal);
}
