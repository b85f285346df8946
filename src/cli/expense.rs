//! Expense CLI commands

use chrono::{Local, Utc};
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_cycle_summary, format_expense_list};
use crate::error::{PlannerError, PlannerResult};
use crate::models::{ExpenseCategory, Money};
use crate::services::AllowanceService;
use crate::session::SessionStore;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount (e.g. "700" or "700.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (food, transport, books, entertainment, utilities, rent, other)
        category: String,
    },

    /// List this week's expenses
    List,

    /// Delete an expense by id
    Delete {
        /// Expense id (full UUID or the "exp-" short form shown in listings)
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    session: &SessionStore,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> PlannerResult<()> {
    let user = session.require_user(storage)?;
    let service = AllowanceService::new(storage);
    let today = Local::now().date_naive();

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
        } => {
            let amount =
                Money::parse(&amount).map_err(|e| PlannerError::InvalidAmount(e.to_string()))?;
            let category: ExpenseCategory =
                category
                    .parse()
                    .map_err(|_| PlannerError::InvalidCategory {
                        given: category.clone(),
                        valid: ExpenseCategory::valid_labels(),
                    })?;

            let expense =
                service.record_expense(user, &description, amount, category, today, Utc::now())?;
            let summary = service.summary(user, today)?;

            println!(
                "Logged {} under {} ({}).",
                expense.amount.format_with_symbol(&settings.currency_symbol),
                expense.category,
                expense.id
            );
            println!(
                "Remaining balance: {}",
                summary.remaining.format_with_symbol(&settings.currency_symbol)
            );
        }
        ExpenseCommands::List => {
            let summary = service.summary(user, today)?;
            print!("{}", format_cycle_summary(&summary, &settings.currency_symbol));
            println!();
            print!(
                "{}",
                format_expense_list(&summary.expenses, &settings.currency_symbol)
            );
        }
        ExpenseCommands::Delete { id } => {
            let expenses = storage.expenses.list(user)?;
            match expenses.iter().find(|e| e.id.matches_input(&id)) {
                Some(expense) => {
                    service.delete_expense(user, expense.id)?;
                    println!("Expense deleted.");
                }
                None => println!("No expense with that id; nothing deleted."),
            }
        }
    }

    Ok(())
}
