//! YAML export
//!
//! Exports one user's complete data set in human-readable form.

use std::io::Write;

use crate::error::{PlannerError, PlannerResult};
use crate::export::json::FullExport;
use crate::models::UserId;
use crate::storage::Storage;

/// Export one user's full data set as YAML
pub fn export_full_yaml<W: Write>(
    storage: &Storage,
    user: UserId,
    writer: &mut W,
) -> PlannerResult<()> {
    let export = FullExport::from_storage(storage, user)?;

    writeln!(writer, "# Campus Planner data export")
        .map_err(|e| PlannerError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| PlannerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| PlannerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| PlannerError::Export(e.to_string()))?;

    Ok(())
}
