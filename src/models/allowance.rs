//! Weekly allowance period
//!
//! Exactly one logical period exists per user. The period is NOT_STARTED
//! until the first allowance amount is set, then ACTIVE; crossing the 7-day
//! boundary re-anchors the period rather than creating a new row.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// Length of an allowance cycle in days
pub const CYCLE_DAYS: i64 = 7;

/// The active weekly budget for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AllowancePeriod {
    /// The weekly budget amount
    #[serde(default)]
    pub amount: Money,

    /// The date the current cycle was anchored; None until the first
    /// allowance amount is set
    #[serde(default)]
    pub started_on: Option<NaiveDate>,
}

impl AllowancePeriod {
    /// A not-yet-started period with a zero amount
    pub fn unstarted() -> Self {
        Self::default()
    }

    /// Whether the cycle clock has been started
    pub fn is_started(&self) -> bool {
        self.started_on.is_some()
    }

    /// Days elapsed since the cycle was anchored, if started
    pub fn days_elapsed(&self, today: NaiveDate) -> Option<i64> {
        self.started_on.map(|start| (today - start).num_days())
    }

    /// Whether a full cycle has elapsed as of `today`
    ///
    /// Fires exactly at the boundary: 7 elapsed days counts as crossed.
    pub fn cycle_elapsed(&self, today: NaiveDate) -> bool {
        matches!(self.days_elapsed(today), Some(days) if days >= CYCLE_DAYS)
    }

    /// Days left before the next crossing, floored at zero
    pub fn days_remaining(&self, today: NaiveDate) -> Option<i64> {
        self.days_elapsed(today)
            .map(|days| (CYCLE_DAYS - days).max(0))
    }
}
