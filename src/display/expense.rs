//! Expense and cycle display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Expense, CYCLE_DAYS};
use crate::services::CycleSummary;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a list of expenses as a table
pub fn format_expense_list(expenses: &[Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses yet. Add one with 'campus expense add'.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow {
            id: e.id.to_string(),
            date: e.created_at.format("%Y-%m-%d").to_string(),
            description: e.description.clone(),
            category: e.category.to_string(),
            amount: e.amount.format_with_symbol(currency),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// Format the cycle summary header shown above expense listings
pub fn format_cycle_summary(summary: &CycleSummary, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Weekly allowance:  {}\n",
        summary.period.amount.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "Total spent:       {}\n",
        summary.total_spent.format_with_symbol(currency)
    ));

    if summary.remaining.is_negative() {
        output.push_str(&format!(
            "Remaining balance: {} (overspent)\n",
            summary.remaining.format_with_symbol(currency)
        ));
    } else {
        output.push_str(&format!(
            "Remaining balance: {}\n",
            summary.remaining.format_with_symbol(currency)
        ));
    }

    match summary.period.started_on {
        Some(start) => {
            output.push_str(&format!(
                "Week started:      {} ({}-day cycle)\n",
                start.format("%Y-%m-%d"),
                CYCLE_DAYS
            ));
        }
        None => {
            output.push_str("Week started:      not yet (set an allowance to start the cycle)\n");
        }
    }

    output
}
