//! Path management for Campus Planner
//!
//! Resolves the configuration/data directory, honoring an explicit override
//! via the `CAMPUS_PLANNER_DATA_DIR` environment variable and falling back to
//! the platform config directory (XDG on Linux, Application Support on macOS,
//! AppData on Windows).

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::PlannerError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "CAMPUS_PLANNER_DATA_DIR";

/// Manages all paths used by Campus Planner
#[derive(Debug, Clone)]
pub struct PlannerPaths {
    /// Base directory for all Campus Planner data
    base_dir: PathBuf,
}

impl PlannerPaths {
    /// Create a new PlannerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// environment override is unset.
    pub fn new() -> Result<Self, PlannerError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "campus-planner").ok_or_else(|| {
                PlannerError::Config("could not determine a config directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create PlannerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the session file (current signed-in user)
    pub fn session_file(&self) -> PathBuf {
        self.base_dir.join("session.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to profiles.json
    pub fn profiles_file(&self) -> PathBuf {
        self.data_dir().join("profiles.json")
    }

    /// Get the path to allowance.json
    pub fn allowance_file(&self) -> PathBuf {
        self.data_dir().join("allowance.json")
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Get the path to study_tasks.json
    pub fn tasks_file(&self) -> PathBuf {
        self.data_dir().join("study_tasks.json")
    }

    /// Get the path to study_reminders.json
    pub fn reminders_file(&self) -> PathBuf {
        self.data_dir().join("study_reminders.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), PlannerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PlannerError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| PlannerError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Campus Planner has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
