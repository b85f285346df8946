//! Weekly allowance cycle state transitions
//!
//! `CycleState` is the explicit state passed into each operation and returned
//! updated; callers load it from storage, apply operations, and persist the
//! result. `evaluate_reset` must run before any balance computation so the
//! balance always reflects the correct cycle.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};
use crate::models::{AllowancePeriod, Expense, ExpenseCategory, ExpenseId, Money};

/// Result of a reset evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetOutcome {
    /// Whether a cycle boundary was crossed
    pub reset_occurred: bool,

    /// Number of expenses cleared by the reset
    pub cleared: usize,
}

impl ResetOutcome {
    fn no_op() -> Self {
        Self {
            reset_occurred: false,
            cleared: 0,
        }
    }
}

/// The in-memory state of one user's allowance cycle
///
/// The expense list holds exactly the expenses attributed to the active
/// period; a reset crossing clears it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CycleState {
    /// The active allowance period
    pub period: AllowancePeriod,

    /// Expenses recorded against the active period
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl CycleState {
    /// Create an empty, not-yet-started cycle
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cycle from persisted rows
    pub fn from_parts(period: AllowancePeriod, expenses: Vec<Expense>) -> Self {
        Self { period, expenses }
    }

    /// Set or update the weekly allowance amount
    ///
    /// The first amount set on a not-yet-started period anchors the cycle at
    /// `today`. Later amount changes keep the existing anchor: changing the
    /// budget mid-week does not restart the week.
    pub fn set_period_amount(&mut self, amount: Money, today: NaiveDate) -> PlannerResult<()> {
        if amount.is_negative() {
            return Err(PlannerError::InvalidAmount(format!(
                "allowance must be a non-negative amount, got {}",
                amount
            )));
        }

        self.period.amount = amount;
        if !self.period.is_started() {
            self.period.started_on = Some(today);
        }
        Ok(())
    }

    /// Record an expense against the active period
    pub fn record_expense(
        &mut self,
        description: &str,
        amount: Money,
        category: ExpenseCategory,
        recorded_at: DateTime<Utc>,
    ) -> PlannerResult<Expense> {
        if !amount.is_positive() {
            return Err(PlannerError::InvalidAmount(format!(
                "expense amount must be positive, got {}",
                amount
            )));
        }
        if description.trim().is_empty() {
            return Err(PlannerError::Validation(
                "expense description must not be empty".to_string(),
            ));
        }

        let expense = Expense::new(description.trim(), amount, category, recorded_at);
        self.expenses.push(expense.clone());
        Ok(expense)
    }

    /// Remove an expense if present
    ///
    /// Returns whether anything was removed; a missing id is a no-op, not an
    /// error, so deletion stays idempotent.
    pub fn delete_expense(&mut self, id: ExpenseId) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        self.expenses.len() != before
    }

    /// Evaluate the weekly reset boundary
    ///
    /// Pure function of `(started_on, today)`: when at least a full cycle has
    /// elapsed, all expenses are cleared and the period re-anchors at `today`.
    /// Re-evaluating at the same instant after a reset is a no-op, since the
    /// new anchor is less than a cycle old.
    pub fn evaluate_reset(&mut self, today: NaiveDate) -> ResetOutcome {
        if !self.period.cycle_elapsed(today) {
            return ResetOutcome::no_op();
        }

        let cleared = self.expenses.len();
        self.expenses.clear();
        self.period.started_on = Some(today);

        ResetOutcome {
            reset_occurred: true,
            cleared,
        }
    }

    /// Total spent in the active period
    pub fn total_spent(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Remaining balance: allowance minus total spent
    ///
    /// May go negative; callers display negative values as overspend.
    pub fn remaining_balance(&self) -> Money {
        self.period.amount - self.total_spent()
    }

    /// Total spent in one category
    pub fn spent_in_category(&self, category: ExpenseCategory) -> Money {
        self.expenses
            .iter()
            .filter(|e| e.category == category)
            .map(|e| e.amount)
            .sum()
    }

    /// Find an expense by id
    pub fn find_expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }
}
