use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use campus_planner::cli::{
    handle_account_command, handle_allowance_command, handle_expense_command,
    handle_export_command, handle_reminder_command, handle_report_command, handle_task_command,
    AccountCommands, AllowanceCommands, ExpenseCommands, ExportCommands, ReminderCommands,
    ReportCommands, TaskCommands,
};
use campus_planner::config::{PlannerPaths, Settings};
use campus_planner::services::AllowanceService;
use campus_planner::session::SessionStore;
use campus_planner::storage::Storage;

#[derive(Parser)]
#[command(
    name = "campus",
    version,
    about = "Student budgeting and study planning from the terminal",
    long_about = "Campus Planner tracks a weekly allowance, per-category spending, \
                  study tasks, and recurring study reminders. Expenses reset \
                  automatically every seven days, so the balance always reflects \
                  the current week."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account and profile management
    #[command(subcommand)]
    Account(AccountCommands),

    /// Weekly allowance management
    #[command(subcommand)]
    Allowance(AllowanceCommands),

    /// Expense tracking
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Study tasks
    #[command(subcommand)]
    Task(TaskCommands),

    /// Recurring study reminders
    #[command(subcommand)]
    Reminder(ReminderCommands),

    /// Spending and study reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export your data
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        count: usize,
    },

    /// Initialize Campus Planner
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PlannerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    let session = SessionStore::new(paths.session_file());

    // One weekly-reset evaluation per invocation, before any command runs,
    // so every surface sees the same cycle
    if let Ok(user) = session.require_user(&storage) {
        let outcome = AllowanceService::new(&storage).sync_week(user, Local::now().date_naive())?;
        if outcome.reset_occurred {
            // Stderr, so piped output (e.g. an export) stays clean
            eprintln!(
                "A new week has started! Expenses reset ({} cleared).",
                outcome.cleared
            );
        }
    }

    match cli.command {
        Some(Commands::Account(cmd)) => {
            handle_account_command(&storage, &session, cmd)?;
        }
        Some(Commands::Allowance(cmd)) => {
            handle_allowance_command(&storage, &session, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &session, &settings, cmd)?;
        }
        Some(Commands::Task(cmd)) => {
            handle_task_command(&storage, &session, cmd)?;
        }
        Some(Commands::Reminder(cmd)) => {
            handle_reminder_command(&storage, &session, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &session, &settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, &session, cmd)?;
        }
        Some(Commands::Audit { count }) => {
            let entries = storage.audit().read_recent(count)?;
            if entries.is_empty() {
                println!("Audit log is empty.");
            }
            for entry in entries {
                println!(
                    "{} {:6} {} {}{}",
                    entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                    entry.operation.to_string(),
                    entry.entity_type,
                    entry.entity_id,
                    entry
                        .summary
                        .map(|s| format!(" - {}", s))
                        .unwrap_or_default()
                );
            }
        }
        Some(Commands::Init) => {
            println!("Initializing Campus Planner at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  campus account sign-up <username>   create your profile");
            println!("  campus allowance set <amount>       start your weekly budget");
            println!("  campus expense add <desc> <amount> <category>");
        }
        Some(Commands::Config) => {
            println!("Campus Planner Configuration");
            println!("============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Upcoming days:   {}", settings.upcoming_days);
        }
        None => {
            println!("Campus Planner - student budgeting and study planning");
            println!();
            println!("Run 'campus --help' for usage information.");
            println!("Run 'campus init' to get started.");
        }
    }

    Ok(())
}
