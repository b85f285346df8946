//! Append-only audit logger
//!
//! Entries are written as line-delimited JSON (JSONL), one complete object
//! per line, flushed on every write.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{PlannerError, PlannerResult};

use super::entry::AuditEntry;

/// Handles writing audit entries to the audit log file
pub struct AuditLogger {
    /// Path to the audit log file
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an audit entry to the log
    pub fn log(&self, entry: &AuditEntry) -> PlannerResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| PlannerError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| PlannerError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| PlannerError::Io(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .map_err(|e| PlannerError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Read all audit entries in chronological order (oldest first)
    pub fn read_all(&self) -> PlannerResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| PlannerError::Io(format!("Failed to open audit log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                PlannerError::Io(format!("Failed to read audit log line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                PlannerError::Json(format!(
                    "Failed to parse audit entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent N entries (oldest of those first)
    pub fn read_recent(&self, count: usize) -> PlannerResult<Vec<AuditEntry>> {
        let all = self.read_all()?;
        let skip = all.len().saturating_sub(count);
        Ok(all.into_iter().skip(skip).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{EntityType, Operation};
    use crate::models::{Profile, UserId};
    use tempfile::TempDir;

    fn test_logger() -> (TempDir, AuditLogger) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (temp_dir, logger)
    }

    #[test]
    fn test_read_empty_log() {
        let (_temp_dir, logger) = test_logger();
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_log_and_read_back() {
        let (_temp_dir, logger) = test_logger();
        let profile = Profile::new("amina");

        logger
            .log(&AuditEntry::create(
                profile.id,
                EntityType::Profile,
                profile.id.to_string(),
                &profile,
            ))
            .unwrap();
        logger.log(&AuditEntry::reset(profile.id, 2, "weekly reset")).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[1].operation, Operation::Reset);
    }

    #[test]
    fn test_read_recent_keeps_the_tail() {
        let (_temp_dir, logger) = test_logger();
        let user = UserId::new();

        for i in 0..5 {
            logger
                .log(&AuditEntry::reset(user, i, "weekly reset"))
                .unwrap();
        }

        let recent = logger.read_recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert!(recent[1].summary.as_deref().unwrap().contains("4 expenses"));
    }
}
