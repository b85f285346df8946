//! Storage layer for Campus Planner
//!
//! JSON file storage with atomic writes: one file per logical table, loaded
//! into memory and written back wholesale. Each repository is independent;
//! there is no cross-table transaction, so services persist the allowance
//! period and the expense list as separate writes.

pub mod allowance;
pub mod expenses;
pub mod file_io;
pub mod profiles;
pub mod reminders;
pub mod tasks;

pub use allowance::AllowanceRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use profiles::ProfileRepository;
pub use reminders::ReminderRepository;
pub use tasks::TaskRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::PlannerPaths;
use crate::error::PlannerError;
use crate::models::UserId;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: PlannerPaths,
    audit: AuditLogger,
    pub profiles: ProfileRepository,
    pub allowance: AllowanceRepository,
    pub expenses: ExpenseRepository,
    pub tasks: TaskRepository,
    pub reminders: ReminderRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: PlannerPaths) -> Result<Self, PlannerError> {
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            profiles: ProfileRepository::new(paths.profiles_file()),
            allowance: AllowanceRepository::new(paths.allowance_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            tasks: TaskRepository::new(paths.tasks_file()),
            reminders: ReminderRepository::new(paths.reminders_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &PlannerPaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all tables from disk
    pub fn load_all(&mut self) -> Result<(), PlannerError> {
        self.profiles.load()?;
        self.allowance.load()?;
        self.expenses.load()?;
        self.tasks.load()?;
        self.reminders.load()?;
        Ok(())
    }

    /// Record a create in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        user: UserId,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity: &T,
    ) -> Result<(), PlannerError> {
        self.audit
            .log(&AuditEntry::create(user, entity_type, entity_id, entity))
    }

    /// Record an update in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        user: UserId,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        before: &T,
        after: &T,
        summary: Option<String>,
    ) -> Result<(), PlannerError> {
        self.audit.log(&AuditEntry::update(
            user,
            entity_type,
            entity_id,
            before,
            after,
            summary,
        ))
    }

    /// Record a delete in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        user: UserId,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity: &T,
    ) -> Result<(), PlannerError> {
        self.audit
            .log(&AuditEntry::delete(user, entity_type, entity_id, entity))
    }

    /// Record a weekly reset crossing in the audit log
    pub fn log_reset(&self, user: UserId, cleared: usize) -> Result<(), PlannerError> {
        self.audit
            .log(&AuditEntry::reset(user, cleared, "weekly reset"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation_makes_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(storage.profiles.count().unwrap(), 0);
    }

    #[test]
    fn test_audit_helpers_append_entries() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let user = UserId::new();
        storage.log_reset(user, 2).unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].user_id, user);
    }
}
