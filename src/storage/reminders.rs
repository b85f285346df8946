//! Study reminder repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PlannerError;
use crate::models::{ReminderId, StudyReminder, UserId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ReminderTable {
    reminders: HashMap<UserId, Vec<StudyReminder>>,
}

/// Repository for per-user study reminders
pub struct ReminderRepository {
    path: PathBuf,
    data: RwLock<HashMap<UserId, Vec<StudyReminder>>>,
}

impl ReminderRepository {
    /// Create a new reminder repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load reminders from disk
    pub fn load(&self) -> Result<(), PlannerError> {
        let table: ReminderTable = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|_| PlannerError::Storage("reminder store lock poisoned".into()))?;

        *data = table.reminders;
        Ok(())
    }

    /// Save reminders to disk
    pub fn save(&self) -> Result<(), PlannerError> {
        let data = self
            .data
            .read()
            .map_err(|_| PlannerError::Storage("reminder store lock poisoned".into()))?;

        write_json_atomic(
            &self.path,
            &ReminderTable {
                reminders: data.clone(),
            },
        )
    }

    /// Read a user's reminders
    pub fn list(&self, user: UserId) -> Result<Vec<StudyReminder>, PlannerError> {
        let data = self
            .data
            .read()
            .map_err(|_| PlannerError::Storage("reminder store lock poisoned".into()))?;

        Ok(data.get(&user).cloned().unwrap_or_default())
    }

    /// Append a new reminder
    pub fn add(&self, user: UserId, reminder: StudyReminder) -> Result<(), PlannerError> {
        let mut data = self
            .data
            .write()
            .map_err(|_| PlannerError::Storage("reminder store lock poisoned".into()))?;

        data.entry(user).or_default().push(reminder);
        Ok(())
    }

    /// Delete a reminder; absent ids are a no-op
    pub fn delete(&self, user: UserId, id: ReminderId) -> Result<bool, PlannerError> {
        let mut data = self
            .data
            .write()
            .map_err(|_| PlannerError::Storage("reminder store lock poisoned".into()))?;

        if let Some(reminders) = data.get_mut(&user) {
            let before = reminders.len();
            reminders.retain(|r| r.id != id);
            return Ok(reminders.len() != before);
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;
    use tempfile::TempDir;

    fn test_repo() -> (TempDir, ReminderRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = ReminderRepository::new(temp_dir.path().join("study_reminders.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    #[test]
    fn test_add_and_list() {
        let (_temp_dir, repo) = test_repo();
        let user = UserId::new();

        repo.add(user, StudyReminder::new("Statistics", Weekday::Thursday, "7PM"))
            .unwrap();

        let reminders = repo.list(user).unwrap();
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].course, "Statistics");
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (_temp_dir, repo) = test_repo();
        let user = UserId::new();
        let reminder = StudyReminder::new("Statistics", Weekday::Thursday, "7PM");
        let id = reminder.id;
        repo.add(user, reminder).unwrap();

        assert!(repo.delete(user, id).unwrap());
        assert!(!repo.delete(user, id).unwrap());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = test_repo();
        let user = UserId::new();
        repo.add(user, StudyReminder::new("Physics", Weekday::Monday, "18:00"))
            .unwrap();
        repo.save().unwrap();

        let repo2 = ReminderRepository::new(temp_dir.path().join("study_reminders.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.list(user).unwrap().len(), 1);
    }
}
