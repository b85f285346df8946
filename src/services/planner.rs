//! Study planner service
//!
//! Business logic for study tasks and recurring reminders: validation,
//! ordering, status transitions, and audit trail.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{PlannerError, PlannerResult};
use crate::models::{ReminderId, StudyReminder, StudyTask, TaskId, TaskStatus, UserId, Weekday};
use crate::storage::Storage;

/// Service for study tasks and reminders
pub struct StudyPlannerService<'a> {
    storage: &'a Storage,
}

impl<'a> StudyPlannerService<'a> {
    /// Create a new study planner service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new study task
    pub fn add_task(
        &self,
        user: UserId,
        title: &str,
        description: &str,
        due_date: NaiveDate,
    ) -> PlannerResult<StudyTask> {
        let task = StudyTask::new(title.trim(), description.trim(), due_date);
        task.validate().map_err(PlannerError::Validation)?;

        self.storage.tasks.add(user, task.clone())?;
        self.storage.tasks.save()?;
        self.storage
            .log_create(user, EntityType::StudyTask, task.id.to_string(), &task)?;

        Ok(task)
    }

    /// List a user's tasks, soonest due first
    pub fn list_tasks(&self, user: UserId) -> PlannerResult<Vec<StudyTask>> {
        let mut tasks = self.storage.tasks.list(user)?;
        tasks.sort_by(|a, b| a.due_date.cmp(&b.due_date).then(a.created_at.cmp(&b.created_at)));
        Ok(tasks)
    }

    /// Tasks due within the horizon, soonest first (overdue included)
    pub fn upcoming_tasks(
        &self,
        user: UserId,
        today: NaiveDate,
        horizon_days: i64,
    ) -> PlannerResult<Vec<StudyTask>> {
        Ok(self
            .list_tasks(user)?
            .into_iter()
            .filter(|t| t.due_within(today, horizon_days))
            .collect())
    }

    /// Change a task's status
    ///
    /// Returns the updated task, or None when the task no longer exists
    /// (a quiet no-op, matching delete semantics).
    pub fn set_task_status(
        &self,
        user: UserId,
        id: TaskId,
        status: TaskStatus,
    ) -> PlannerResult<Option<StudyTask>> {
        let Some(mut task) = self.storage.tasks.get(user, id)? else {
            return Ok(None);
        };

        let before = task.clone();
        task.set_status(status);

        self.storage.tasks.replace(user, task.clone())?;
        self.storage.tasks.save()?;
        self.storage.log_update(
            user,
            EntityType::StudyTask,
            id.to_string(),
            &before,
            &task,
            Some(format!("status: {} -> {}", before.status, task.status)),
        )?;

        Ok(Some(task))
    }

    /// Delete a task; a missing id is a quiet no-op
    pub fn delete_task(&self, user: UserId, id: TaskId) -> PlannerResult<bool> {
        let existing = self.storage.tasks.get(user, id)?;
        if !self.storage.tasks.delete(user, id)? {
            return Ok(false);
        }
        self.storage.tasks.save()?;

        if let Some(task) = existing {
            self.storage
                .log_delete(user, EntityType::StudyTask, id.to_string(), &task)?;
        }
        Ok(true)
    }

    /// Add a new recurring reminder
    pub fn add_reminder(
        &self,
        user: UserId,
        course: &str,
        weekday: Weekday,
        time: &str,
    ) -> PlannerResult<StudyReminder> {
        let reminder = StudyReminder::new(course.trim(), weekday, time.trim());
        reminder.validate().map_err(PlannerError::Validation)?;

        self.storage.reminders.add(user, reminder.clone())?;
        self.storage.reminders.save()?;
        self.storage.log_create(
            user,
            EntityType::StudyReminder,
            reminder.id.to_string(),
            &reminder,
        )?;

        Ok(reminder)
    }

    /// List a user's reminders, ordered Monday-first then by course
    pub fn list_reminders(&self, user: UserId) -> PlannerResult<Vec<StudyReminder>> {
        let mut reminders = self.storage.reminders.list(user)?;
        reminders.sort_by(|a, b| a.weekday.cmp(&b.weekday).then(a.course.cmp(&b.course)));
        Ok(reminders)
    }

    /// Delete a reminder; a missing id is a quiet no-op
    pub fn delete_reminder(&self, user: UserId, id: ReminderId) -> PlannerResult<bool> {
        let existing = self
            .storage
            .reminders
            .list(user)?
            .into_iter()
            .find(|r| r.id == id);

        if !self.storage.reminders.delete(user, id)? {
            return Ok(false);
        }
        self.storage.reminders.save()?;

        if let Some(reminder) = existing {
            self.storage
                .log_delete(user, EntityType::StudyReminder, id.to_string(), &reminder)?;
        }
        Ok(true)
    }
}
