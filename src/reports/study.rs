//! Study overview report
//!
//! Summarizes the study planner: task counts by status, what is due soon,
//! and the recurring weekly schedule.

use chrono::NaiveDate;

use crate::models::{StudyReminder, StudyTask, TaskStatus, Weekday};

/// Overview of one user's study planner
#[derive(Debug, Clone)]
pub struct StudyOverview {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub overdue: Vec<StudyTask>,
    pub due_soon: Vec<StudyTask>,
    pub schedule: Vec<StudyReminder>,
}

impl StudyOverview {
    /// Build an overview from a user's tasks and reminders
    ///
    /// `due_soon` covers open tasks due within `horizon_days` of `today`,
    /// excluding the ones already overdue.
    pub fn build(
        tasks: &[StudyTask],
        reminders: &[StudyReminder],
        today: NaiveDate,
        horizon_days: i64,
    ) -> Self {
        let count = |status: TaskStatus| tasks.iter().filter(|t| t.status == status).count();

        let overdue: Vec<StudyTask> = tasks
            .iter()
            .filter(|t| t.is_overdue(today))
            .cloned()
            .collect();

        let due_soon: Vec<StudyTask> = tasks
            .iter()
            .filter(|t| t.due_within(today, horizon_days) && !t.is_overdue(today))
            .cloned()
            .collect();

        let mut schedule = reminders.to_vec();
        schedule.sort_by(|a, b| a.weekday.cmp(&b.weekday).then(a.course.cmp(&b.course)));

        Self {
            pending: count(TaskStatus::Pending),
            in_progress: count(TaskStatus::InProgress),
            completed: count(TaskStatus::Completed),
            overdue,
            due_soon,
            schedule,
        }
    }

    /// Reminders that fall on the given weekday
    pub fn reminders_on(&self, weekday: Weekday) -> Vec<&StudyReminder> {
        self.schedule.iter().filter(|r| r.weekday == weekday).collect()
    }

    /// Total number of open (not completed) tasks
    pub fn open_tasks(&self) -> usize {
        self.pending + self.in_progress
    }
}
