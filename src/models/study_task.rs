//! Study task model
//!
//! Tasks have an independent lifecycle: status moves freely among pending,
//! in-progress, and completed with no ordering constraint.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TaskId;

/// Status of a study task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::InProgress => write!(f, "in progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Error type for status parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusParseError(pub String);

impl fmt::Display for StatusParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown status '{}' (expected pending, in-progress, or completed)",
            self.0
        )
    }
}

impl std::error::Error for StatusParseError {}

impl FromStr for TaskStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" | "in-progress" | "inprogress" => Ok(Self::InProgress),
            "completed" | "done" => Ok(Self::Completed),
            other => Err(StatusParseError(other.to_string())),
        }
    }
}

/// A study task with a due date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyTask {
    /// Unique identifier
    pub id: TaskId,

    /// Task title
    pub title: String,

    /// Longer description
    #[serde(default)]
    pub description: String,

    /// Due date
    pub due_date: NaiveDate,

    /// Current status
    #[serde(default)]
    pub status: TaskStatus,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last modified
    pub updated_at: DateTime<Utc>,
}

impl StudyTask {
    /// Create a new pending task
    pub fn new(title: impl Into<String>, description: impl Into<String>, due_date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: description.into(),
            due_date,
            status: TaskStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Change the status
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Whether the task is due within `horizon_days` of `today` and not done
    pub fn due_within(&self, today: NaiveDate, horizon_days: i64) -> bool {
        !self.status.is_completed() && (self.due_date - today).num_days() <= horizon_days
    }

    /// Whether the due date has passed without completion
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.status.is_completed() && self.due_date < today
    }

    /// Validate the task fields
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("task title must not be empty".to_string());
        }
        Ok(())
    }
}
