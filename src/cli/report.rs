//! Report CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_spending_report, format_study_overview};
use crate::engine::CycleState;
use crate::error::PlannerResult;
use crate::reports::{SpendingReport, StudyOverview};
use crate::services::{AllowanceService, StudyPlannerService};
use crate::session::SessionStore;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Per-category spending for the current week
    Spending,

    /// Task counts, upcoming deadlines, and the weekly schedule
    Study,
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    session: &SessionStore,
    settings: &Settings,
    cmd: ReportCommands,
) -> PlannerResult<()> {
    let user = session.require_user(storage)?;
    let today = Local::now().date_naive();

    match cmd {
        ReportCommands::Spending => {
            let summary = AllowanceService::new(storage).summary(user, today)?;
            let cycle = CycleState::from_parts(summary.period, summary.expenses);
            let report = SpendingReport::build(&cycle);
            print!("{}", format_spending_report(&report, &settings.currency_symbol));
        }
        ReportCommands::Study => {
            let planner = StudyPlannerService::new(storage);
            let tasks = planner.list_tasks(user)?;
            let reminders = planner.list_reminders(user)?;
            let overview = StudyOverview::build(&tasks, &reminders, today, settings.upcoming_days);
            print!("{}", format_study_overview(&overview));
        }
    }

    Ok(())
}
