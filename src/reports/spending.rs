//! Spending report
//!
//! Per-category breakdown of the current cycle, with the overall totals every
//! surface derives from the same engine arithmetic.

use crate::engine::CycleState;
use crate::models::{AllowancePeriod, ExpenseCategory, Money};

/// Spending in one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpend {
    pub category: ExpenseCategory,
    pub total: Money,
    pub count: usize,
}

/// A full spending report for the active cycle
#[derive(Debug, Clone)]
pub struct SpendingReport {
    pub period: AllowancePeriod,
    pub categories: Vec<CategorySpend>,
    pub total_spent: Money,
    pub remaining: Money,
}

impl SpendingReport {
    /// Build a report from cycle state
    ///
    /// Every category appears, including ones with no spending, so the report
    /// shape is stable week over week.
    pub fn build(cycle: &CycleState) -> Self {
        let categories = ExpenseCategory::ALL
            .iter()
            .map(|&category| CategorySpend {
                category,
                total: cycle.spent_in_category(category),
                count: cycle
                    .expenses
                    .iter()
                    .filter(|e| e.category == category)
                    .count(),
            })
            .collect();

        Self {
            period: cycle.period,
            categories,
            total_spent: cycle.total_spent(),
            remaining: cycle.remaining_balance(),
        }
    }

    /// Whether the cycle is overspent
    pub fn is_overspent(&self) -> bool {
        self.remaining.is_negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn sample_cycle() -> CycleState {
        let mut cycle = CycleState::new();
        cycle
            .set_period_amount(
                Money::from_units(5000),
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            )
            .unwrap();
        cycle
            .record_expense("Lunch", Money::from_units(700), ExpenseCategory::Food, Utc::now())
            .unwrap();
        cycle
            .record_expense("Dinner", Money::from_units(900), ExpenseCategory::Food, Utc::now())
            .unwrap();
        cycle
            .record_expense("Bus", Money::from_units(200), ExpenseCategory::Transport, Utc::now())
            .unwrap();
        cycle
    }

    #[test]
    fn test_report_totals() {
        let report = SpendingReport::build(&sample_cycle());

        assert_eq!(report.total_spent, Money::from_units(1800));
        assert_eq!(report.remaining, Money::from_units(3200));
        assert!(!report.is_overspent());
    }

    #[test]
    fn test_every_category_present() {
        let report = SpendingReport::build(&sample_cycle());
        assert_eq!(report.categories.len(), ExpenseCategory::ALL.len());

        let food = report
            .categories
            .iter()
            .find(|c| c.category == ExpenseCategory::Food)
            .unwrap();
        assert_eq!(food.total, Money::from_units(1600));
        assert_eq!(food.count, 2);

        let rent = report
            .categories
            .iter()
            .find(|c| c.category == ExpenseCategory::Rent)
            .unwrap();
        assert_eq!(rent.total, Money::zero());
        assert_eq!(rent.count, 0);
    }

    #[test]
    fn test_overspent_flag() {
        let mut cycle = CycleState::new();
        cycle
            .set_period_amount(
                Money::from_units(100),
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            )
            .unwrap();
        cycle
            .record_expense("Books", Money::from_units(300), ExpenseCategory::Books, Utc::now())
            .unwrap();

        let report = SpendingReport::build(&cycle);
        assert!(report.is_overspent());
        assert_eq!(report.remaining, Money::from_units(-200));
    }
}
