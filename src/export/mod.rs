//! Export module for Campus Planner
//!
//! Provides data export in multiple formats:
//! - CSV: per-table, spreadsheet-compatible
//! - JSON: machine-readable full export
//! - YAML: human-readable full export

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_expenses_csv, export_reminders_csv, export_tasks_csv};
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
