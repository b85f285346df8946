//! Display formatting for terminal output

pub mod expense;
pub mod planner;
pub mod report;

pub use expense::{format_cycle_summary, format_expense_list};
pub use planner::{format_reminder_list, format_task_details, format_task_list};
pub use report::{format_spending_report, format_study_overview};
