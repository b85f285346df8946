//! Allowance service
//!
//! Orchestrates the allowance cycle engine against storage: load the cycle
//! state, apply an engine operation, persist the completed state, audit. The
//! weekly reset is evaluated here — and only here — so every command line
//! surface sees the same cycle.

use chrono::{DateTime, NaiveDate, Utc};

use crate::audit::EntityType;
use crate::engine::{CycleState, ResetOutcome};
use crate::error::PlannerResult;
use crate::models::{AllowancePeriod, Expense, ExpenseCategory, ExpenseId, Money, UserId};
use crate::storage::Storage;

/// Service for allowance and expense management
pub struct AllowanceService<'a> {
    storage: &'a Storage,
}

/// Snapshot of one user's cycle for display
#[derive(Debug, Clone)]
pub struct CycleSummary {
    pub period: AllowancePeriod,
    pub expenses: Vec<Expense>,
    pub total_spent: Money,
    pub remaining: Money,
}

impl<'a> AllowanceService<'a> {
    /// Create a new allowance service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Load a user's cycle state from the store
    fn load_cycle(&self, user: UserId) -> PlannerResult<CycleState> {
        let period = self.storage.allowance.get(user)?.unwrap_or_default();
        let expenses = self.storage.expenses.list(user)?;
        Ok(CycleState::from_parts(period, expenses))
    }

    /// Persist a user's cycle state to the store
    ///
    /// The state passed in is always a fully applied transition; a storage
    /// failure leaves the in-memory state untouched for the caller to retry
    /// or discard.
    fn persist_cycle(&self, user: UserId, cycle: &CycleState) -> PlannerResult<()> {
        self.storage.allowance.set(user, cycle.period)?;
        self.storage.expenses.replace_all(user, cycle.expenses.clone())?;
        self.storage.allowance.save()?;
        self.storage.expenses.save()?;
        Ok(())
    }

    /// Evaluate the weekly reset and persist a crossing
    ///
    /// Safe to call redundantly: once a crossing has been applied, repeat
    /// evaluations at the same date are no-ops.
    pub fn sync_week(&self, user: UserId, today: NaiveDate) -> PlannerResult<ResetOutcome> {
        let (_, outcome) = self.synced_cycle(user, today)?;
        Ok(outcome)
    }

    fn synced_cycle(
        &self,
        user: UserId,
        today: NaiveDate,
    ) -> PlannerResult<(CycleState, ResetOutcome)> {
        let mut cycle = self.load_cycle(user)?;
        let outcome = cycle.evaluate_reset(today);

        if outcome.reset_occurred {
            self.persist_cycle(user, &cycle)?;
            self.storage.log_reset(user, outcome.cleared)?;
        }

        Ok((cycle, outcome))
    }

    /// Set or update the weekly allowance
    pub fn set_allowance(
        &self,
        user: UserId,
        amount: Money,
        today: NaiveDate,
    ) -> PlannerResult<AllowancePeriod> {
        let (mut cycle, _) = self.synced_cycle(user, today)?;
        let before = cycle.period;

        cycle.set_period_amount(amount, today)?;
        self.persist_cycle(user, &cycle)?;

        self.storage.log_update(
            user,
            EntityType::Allowance,
            user.to_string(),
            &before,
            &cycle.period,
            Some(format!(
                "allowance: {} -> {}",
                before.amount, cycle.period.amount
            )),
        )?;

        Ok(cycle.period)
    }

    /// Record a new expense against the current cycle
    pub fn record_expense(
        &self,
        user: UserId,
        description: &str,
        amount: Money,
        category: ExpenseCategory,
        today: NaiveDate,
        recorded_at: DateTime<Utc>,
    ) -> PlannerResult<Expense> {
        let (mut cycle, _) = self.synced_cycle(user, today)?;

        let expense = cycle.record_expense(description, amount, category, recorded_at)?;
        self.persist_cycle(user, &cycle)?;

        self.storage
            .log_create(user, EntityType::Expense, expense.id.to_string(), &expense)?;

        Ok(expense)
    }

    /// Delete an expense; a missing id is a quiet no-op
    pub fn delete_expense(&self, user: UserId, id: ExpenseId) -> PlannerResult<bool> {
        let mut cycle = self.load_cycle(user)?;

        let removed = cycle.find_expense(id).cloned();
        if !cycle.delete_expense(id) {
            return Ok(false);
        }
        self.persist_cycle(user, &cycle)?;

        if let Some(expense) = removed {
            self.storage
                .log_delete(user, EntityType::Expense, id.to_string(), &expense)?;
        }

        Ok(true)
    }

    /// Get a display snapshot of the current cycle
    ///
    /// The reset is evaluated first so the snapshot always reflects the
    /// correct week.
    pub fn summary(&self, user: UserId, today: NaiveDate) -> PlannerResult<CycleSummary> {
        let (cycle, _) = self.synced_cycle(user, today)?;
        Ok(CycleSummary {
            total_spent: cycle.total_spent(),
            remaining: cycle.remaining_balance(),
            period: cycle.period,
            expenses: cycle.expenses,
        })
    }
}
