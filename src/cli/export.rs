//! Export CLI commands

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::error::{PlannerError, PlannerResult};
use crate::export::{
    export_expenses_csv, export_full_json, export_full_yaml, export_reminders_csv,
    export_tasks_csv,
};
use crate::session::SessionStore;
use crate::storage::Storage;

/// Which table a CSV export covers
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CsvTable {
    Expenses,
    Tasks,
    Reminders,
}

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export your full data set as JSON
    Json {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export your full data set as YAML
    Yaml {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export one table as CSV
    Csv {
        /// Table to export
        table: CsvTable,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn open_writer(output: Option<PathBuf>) -> PlannerResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                PlannerError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Handle an export command
pub fn handle_export_command(
    storage: &Storage,
    session: &SessionStore,
    cmd: ExportCommands,
) -> PlannerResult<()> {
    let user = session.require_user(storage)?;

    match cmd {
        ExportCommands::Json { output } => {
            let mut writer = open_writer(output)?;
            export_full_json(storage, user, &mut writer)?;
        }
        ExportCommands::Yaml { output } => {
            let mut writer = open_writer(output)?;
            export_full_yaml(storage, user, &mut writer)?;
        }
        ExportCommands::Csv { table, output } => {
            let mut writer = open_writer(output)?;
            match table {
                CsvTable::Expenses => export_expenses_csv(storage, user, &mut writer)?,
                CsvTable::Tasks => export_tasks_csv(storage, user, &mut writer)?,
                CsvTable::Reminders => export_reminders_csv(storage, user, &mut writer)?,
            }
        }
    }

    Ok(())
}
