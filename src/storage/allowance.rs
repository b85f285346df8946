//! Allowance period repository for JSON storage
//!
//! One logical row per user: the active allowance period. Resets re-anchor
//! the row in place rather than inserting history.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PlannerError;
use crate::models::{AllowancePeriod, UserId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct AllowanceTable {
    periods: HashMap<UserId, AllowancePeriod>,
}

/// Repository for per-user allowance periods
pub struct AllowanceRepository {
    path: PathBuf,
    data: RwLock<HashMap<UserId, AllowancePeriod>>,
}

impl AllowanceRepository {
    /// Create a new allowance repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load allowance periods from disk
    pub fn load(&self) -> Result<(), PlannerError> {
        let table: AllowanceTable = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|_| PlannerError::Storage("allowance store lock poisoned".into()))?;

        *data = table.periods;
        Ok(())
    }

    /// Save allowance periods to disk
    pub fn save(&self) -> Result<(), PlannerError> {
        let data = self
            .data
            .read()
            .map_err(|_| PlannerError::Storage("allowance store lock poisoned".into()))?;

        write_json_atomic(
            &self.path,
            &AllowanceTable {
                periods: data.clone(),
            },
        )
    }

    /// Read a user's active period, if any
    pub fn get(&self, user: UserId) -> Result<Option<AllowancePeriod>, PlannerError> {
        let data = self
            .data
            .read()
            .map_err(|_| PlannerError::Storage("allowance store lock poisoned".into()))?;

        Ok(data.get(&user).copied())
    }

    /// Write a user's active period
    pub fn set(&self, user: UserId, period: AllowancePeriod) -> Result<(), PlannerError> {
        let mut data = self
            .data
            .write()
            .map_err(|_| PlannerError::Storage("allowance store lock poisoned".into()))?;

        data.insert(user, period);
        Ok(())
    }
}
