//! JSON export
//!
//! Exports one user's complete data set for machine-readable backup.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};
use crate::models::{AllowancePeriod, Expense, Profile, StudyReminder, StudyTask, UserId};
use crate::storage::Storage;

/// Schema version of the export format
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

/// One user's complete data set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: u32,
    pub app_version: String,
    pub exported_at: DateTime<Utc>,
    pub profile: Profile,
    pub allowance: AllowancePeriod,
    pub expenses: Vec<Expense>,
    pub study_tasks: Vec<StudyTask>,
    pub study_reminders: Vec<StudyReminder>,
}

impl FullExport {
    /// Gather a user's data from storage
    pub fn from_storage(storage: &Storage, user: UserId) -> PlannerResult<Self> {
        let profile = storage
            .profiles
            .get(user)?
            .ok_or_else(|| PlannerError::profile_not_found(user.to_string()))?;

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            profile,
            allowance: storage.allowance.get(user)?.unwrap_or_default(),
            expenses: storage.expenses.list(user)?,
            study_tasks: storage.tasks.list(user)?,
            study_reminders: storage.reminders.list(user)?,
        })
    }
}

/// Export one user's full data set as pretty-printed JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    user: UserId,
    writer: &mut W,
) -> PlannerResult<()> {
    let export = FullExport::from_storage(storage, user)?;

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| PlannerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| PlannerError::Export(e.to_string()))?;

    Ok(())
}
