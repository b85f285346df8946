//! Core data models for Campus Planner
//!
//! This module contains all the data structures that represent the domain:
//! allowance periods, expenses, study tasks, reminders, and profiles.

pub mod allowance;
pub mod expense;
pub mod ids;
pub mod money;
pub mod profile;
pub mod reminder;
pub mod study_task;

pub use allowance::{AllowancePeriod, CYCLE_DAYS};
pub use expense::{CategoryParseError, Expense, ExpenseCategory};
pub use ids::{ExpenseId, ReminderId, TaskId, UserId};
pub use money::{Money, MoneyParseError};
pub use profile::Profile;
pub use reminder::{StudyReminder, Weekday, WeekdayParseError};
pub use study_task::{StatusParseError, StudyTask, TaskStatus};
