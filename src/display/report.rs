//! Report display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::reports::{SpendingReport, StudyOverview};

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Expenses")]
    count: usize,
    #[tabled(rename = "Total")]
    total: String,
}

/// Format the weekly spending report
pub fn format_spending_report(report: &SpendingReport, currency: &str) -> String {
    let mut output = String::new();

    output.push_str("Weekly Spending Report\n");
    output.push_str(&"=".repeat(40));
    output.push('\n');

    let rows: Vec<CategoryRow> = report
        .categories
        .iter()
        .map(|c| CategoryRow {
            category: c.category.to_string(),
            count: c.count,
            total: c.total.format_with_symbol(currency),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    output.push_str(&table.to_string());
    output.push('\n');

    output.push_str(&format!(
        "\nAllowance: {}   Spent: {}   Remaining: {}{}\n",
        report.period.amount.format_with_symbol(currency),
        report.total_spent.format_with_symbol(currency),
        report.remaining.format_with_symbol(currency),
        if report.is_overspent() { " (overspent)" } else { "" },
    ));

    output
}

/// Format the study overview report
pub fn format_study_overview(overview: &StudyOverview) -> String {
    let mut output = String::new();

    output.push_str("Study Overview\n");
    output.push_str(&"=".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "Tasks: {} pending, {} in progress, {} completed\n",
        overview.pending, overview.in_progress, overview.completed
    ));

    if !overview.overdue.is_empty() {
        output.push_str("\nOverdue:\n");
        for task in &overview.overdue {
            output.push_str(&format!(
                "  {} (was due {})\n",
                task.title,
                task.due_date.format("%Y-%m-%d")
            ));
        }
    }

    if !overview.due_soon.is_empty() {
        output.push_str("\nDue soon:\n");
        for task in &overview.due_soon {
            output.push_str(&format!(
                "  {} (due {})\n",
                task.title,
                task.due_date.format("%Y-%m-%d")
            ));
        }
    }

    if overview.schedule.is_empty() {
        output.push_str("\nNo recurring study sessions.\n");
    } else {
        output.push_str("\nWeekly schedule:\n");
        for reminder in &overview.schedule {
            output.push_str(&format!(
                "  {} at {} - {}\n",
                reminder.weekday, reminder.time, reminder.course
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CycleState;
    use crate::models::{ExpenseCategory, Money, StudyReminder, StudyTask, Weekday};
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_spending_report_output() {
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

        let report = SpendingReport::build(&cycle);
        let output = format_spending_report(&report, "CFA");

        assert!(output.contains("Weekly Spending Report"));
        assert!(output.contains("food"));
        assert!(output.contains("CFA700.00"));
        assert!(output.contains("Remaining: CFA4300.00"));
    }

    #[test]
    fn test_study_overview_output() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();
        let tasks = vec![StudyTask::new(
            "Essay",
            "",
            NaiveDate::from_ymd_opt(2025, 5, 8).unwrap(),
        )];
        let reminders = vec![StudyReminder::new("Physics", Weekday::Monday, "7PM")];

        let overview = StudyOverview::build(&tasks, &reminders, today, 7);
        let output = format_study_overview(&overview);

        assert!(output.contains("1 pending"));
        assert!(output.contains("Due soon:"));
        assert!(output.contains("Monday at 7PM - Physics"));
    }
}
