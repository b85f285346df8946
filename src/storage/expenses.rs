//! Expense repository for JSON storage
//!
//! Expenses are stored per user as the full list attributed to the active
//! cycle; the cycle engine owns the list's contents, so writes replace it
//! wholesale.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PlannerError;
use crate::models::{Expense, UserId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseTable {
    expenses: HashMap<UserId, Vec<Expense>>,
}

/// Repository for per-user expense lists
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<UserId, Vec<Expense>>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk
    pub fn load(&self) -> Result<(), PlannerError> {
        let table: ExpenseTable = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|_| PlannerError::Storage("expense store lock poisoned".into()))?;

        *data = table.expenses;
        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), PlannerError> {
        let data = self
            .data
            .read()
            .map_err(|_| PlannerError::Storage("expense store lock poisoned".into()))?;

        write_json_atomic(
            &self.path,
            &ExpenseTable {
                expenses: data.clone(),
            },
        )
    }

    /// Read a user's expense list (newest last)
    pub fn list(&self, user: UserId) -> Result<Vec<Expense>, PlannerError> {
        let data = self
            .data
            .read()
            .map_err(|_| PlannerError::Storage("expense store lock poisoned".into()))?;

        Ok(data.get(&user).cloned().unwrap_or_default())
    }

    /// Replace a user's expense list wholesale
    pub fn replace_all(&self, user: UserId, expenses: Vec<Expense>) -> Result<(), PlannerError> {
        let mut data = self
            .data
            .write()
            .map_err(|_| PlannerError::Storage("expense store lock poisoned".into()))?;

        if expenses.is_empty() {
            data.remove(&user);
        } else {
            data.insert(user, expenses);
        }
        Ok(())
    }

    /// Count a user's expenses
    pub fn count(&self, user: UserId) -> Result<usize, PlannerError> {
        let data = self
            .data
            .read()
            .map_err(|_| PlannerError::Storage("expense store lock poisoned".into()))?;

        Ok(data.get(&user).map(|v| v.len()).unwrap_or(0))
    }
}
