use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::trace;

use crate::ledger::Ledger;
use crate::types::UserId;

/// An ISO-8601 week: the week belongs to the year containing its Thursday.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct WeekKey {
    pub year: i32,
    pub week: u32
}

impl WeekKey {
    pub fn from_date(date: NaiveDate) -> Self {
        let iso_week = date.iso_week();

        Self {
            year: iso_week.year(),
            week: iso_week.week()
        }
    }
}

/// Withdrawals counted toward the free allowance within one week.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct WeeklyUsage {
    /// Cumulative EUR-equivalent amount.
    pub total_eur: Decimal,
    /// Number of fully free withdrawals.
    pub count: u32
}

/// In-memory ledger that lives as long as the engine owning it.
#[derive(Debug, Default)]
pub struct WeeklyLedger {
    usage: HashMap<(UserId, WeekKey), WeeklyUsage>
}

impl WeeklyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of (user, week) entries recorded so far.
    pub fn len(&self) -> usize {
        self.usage.len()
    }
}

impl Ledger for WeeklyLedger {
    fn get(&self, user_id: UserId, week: WeekKey) -> WeeklyUsage {
        self.usage.get(&(user_id, week)).copied().unwrap_or_default()
    }

    fn update(&mut self, user_id: UserId, week: WeekKey, delta_eur: Decimal, increment_count: u32) {
        let usage = self.usage.entry((user_id, week)).or_default();
        usage.total_eur += delta_eur;
        usage.count += increment_count;

        trace!("Ledger for client [{user_id}] week [{}-W{:02}] now {:?}", week.year, week.week, usage);
    }

    fn set_total(&mut self, user_id: UserId, week: WeekKey, total_eur: Decimal) {
        let usage = self.usage.entry((user_id, week)).or_default();
        usage.total_eur = total_eur;

        trace!("Ledger for client [{user_id}] week [{}-W{:02}] capped at {total_eur}", week.year, week.week);
    }
}
