//! Allowance CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_cycle_summary;
use crate::error::{PlannerError, PlannerResult};
use crate::models::Money;
use crate::services::AllowanceService;
use crate::session::SessionStore;
use crate::storage::Storage;

/// Allowance subcommands
#[derive(Subcommand)]
pub enum AllowanceCommands {
    /// Set or update the weekly allowance
    Set {
        /// Amount (e.g. "5000" or "5000.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show the current cycle: allowance, spent, remaining
    Show,
}

/// Handle an allowance command
pub fn handle_allowance_command(
    storage: &Storage,
    session: &SessionStore,
    settings: &Settings,
    cmd: AllowanceCommands,
) -> PlannerResult<()> {
    let user = session.require_user(storage)?;
    let service = AllowanceService::new(storage);
    let today = Local::now().date_naive();

    match cmd {
        AllowanceCommands::Set { amount } => {
            let amount =
                Money::parse(&amount).map_err(|e| PlannerError::InvalidAmount(e.to_string()))?;

            let period = service.set_allowance(user, amount, today)?;
            println!(
                "Weekly allowance set to {}.",
                period.amount.format_with_symbol(&settings.currency_symbol)
            );
        }
        AllowanceCommands::Show => {
            let summary = service.summary(user, today)?;
            print!("{}", format_cycle_summary(&summary, &settings.currency_symbol));
        }
    }

    Ok(())
}
