//! CLI command definitions and handlers

pub mod account;
pub mod allowance;
pub mod expense;
pub mod export;
pub mod reminder;
pub mod report;
pub mod task;

pub use account::{handle_account_command, AccountCommands};
pub use allowance::{handle_allowance_command, AllowanceCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use reminder::{handle_reminder_command, ReminderCommands};
pub use report::{handle_report_command, ReportCommands};
pub use task::{handle_task_command, TaskCommands};
