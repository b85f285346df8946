//! Study task repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PlannerError;
use crate::models::{StudyTask, TaskId, UserId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TaskTable {
    tasks: HashMap<UserId, Vec<StudyTask>>,
}

/// Repository for per-user study tasks
pub struct TaskRepository {
    path: PathBuf,
    data: RwLock<HashMap<UserId, Vec<StudyTask>>>,
}

impl TaskRepository {
    /// Create a new task repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load tasks from disk
    pub fn load(&self) -> Result<(), PlannerError> {
        let table: TaskTable = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|_| PlannerError::Storage("task store lock poisoned".into()))?;

        *data = table.tasks;
        Ok(())
    }

    /// Save tasks to disk
    pub fn save(&self) -> Result<(), PlannerError> {
        let data = self
            .data
            .read()
            .map_err(|_| PlannerError::Storage("task store lock poisoned".into()))?;

        write_json_atomic(&self.path, &TaskTable { tasks: data.clone() })
    }

    /// Read a user's tasks
    pub fn list(&self, user: UserId) -> Result<Vec<StudyTask>, PlannerError> {
        let data = self
            .data
            .read()
            .map_err(|_| PlannerError::Storage("task store lock poisoned".into()))?;

        Ok(data.get(&user).cloned().unwrap_or_default())
    }

    /// Get one task by id
    pub fn get(&self, user: UserId, id: TaskId) -> Result<Option<StudyTask>, PlannerError> {
        let data = self
            .data
            .read()
            .map_err(|_| PlannerError::Storage("task store lock poisoned".into()))?;

        Ok(data
            .get(&user)
            .and_then(|tasks| tasks.iter().find(|t| t.id == id))
            .cloned())
    }

    /// Append a new task
    pub fn add(&self, user: UserId, task: StudyTask) -> Result<(), PlannerError> {
        let mut data = self
            .data
            .write()
            .map_err(|_| PlannerError::Storage("task store lock poisoned".into()))?;

        data.entry(user).or_default().push(task);
        Ok(())
    }

    /// Replace an existing task (matched by id)
    ///
    /// Returns whether a task was replaced.
    pub fn replace(&self, user: UserId, task: StudyTask) -> Result<bool, PlannerError> {
        let mut data = self
            .data
            .write()
            .map_err(|_| PlannerError::Storage("task store lock poisoned".into()))?;

        if let Some(tasks) = data.get_mut(&user) {
            if let Some(slot) = tasks.iter_mut().find(|t| t.id == task.id) {
                *slot = task;
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Delete a task; absent ids are a no-op
    pub fn delete(&self, user: UserId, id: TaskId) -> Result<bool, PlannerError> {
        let mut data = self
            .data
            .write()
            .map_err(|_| PlannerError::Storage("task store lock poisoned".into()))?;

        if let Some(tasks) = data.get_mut(&user) {
            let before = tasks.len();
            tasks.retain(|t| t.id != id);
            return Ok(tasks.len() != before);
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample_task(title: &str) -> StudyTask {
        StudyTask::new(title, "", NaiveDate::from_ymd_opt(2025, 5, 1).unwrap())
    }

    fn test_repo() -> (TempDir, TaskRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = TaskRepository::new(temp_dir.path().join("study_tasks.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    #[test]
    fn test_add_get_and_list() {
        let (_temp_dir, repo) = test_repo();
        let user = UserId::new();
        let task = sample_task("Revise algebra");
        let id = task.id;

        repo.add(user, task).unwrap();

        assert_eq!(repo.list(user).unwrap().len(), 1);
        assert_eq!(repo.get(user, id).unwrap().unwrap().title, "Revise algebra");
    }

    #[test]
    fn test_replace_updates_in_place() {
        let (_temp_dir, repo) = test_repo();
        let user = UserId::new();
        let mut task = sample_task("Lab report");
        let id = task.id;
        repo.add(user, task.clone()).unwrap();

        task.set_status(TaskStatus::Completed);
        assert!(repo.replace(user, task).unwrap());

        let stored = repo.get(user, id).unwrap().unwrap();
        assert_eq!(stored.status, TaskStatus::Completed);
    }

    #[test]
    fn test_replace_unknown_task_is_false() {
        let (_temp_dir, repo) = test_repo();
        let user = UserId::new();
        assert!(!repo.replace(user, sample_task("Ghost")).unwrap());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (_temp_dir, repo) = test_repo();
        let user = UserId::new();
        let task = sample_task("Essay");
        let id = task.id;
        repo.add(user, task).unwrap();

        assert!(repo.delete(user, id).unwrap());
        assert!(!repo.delete(user, id).unwrap());
        assert!(repo.list(user).unwrap().is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = test_repo();
        let user = UserId::new();
        repo.add(user, sample_task("Essay")).unwrap();
        repo.save().unwrap();

        let repo2 = TaskRepository::new(temp_dir.path().join("study_tasks.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.list(user).unwrap().len(), 1);
    }
}
