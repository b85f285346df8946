//! CSV export
//!
//! Exports expense and study planner tables in spreadsheet-compatible form.

use std::io::Write;

use crate::error::{PlannerError, PlannerResult};
use crate::models::UserId;
use crate::storage::Storage;

fn csv_err(e: csv::Error) -> PlannerError {
    PlannerError::Export(e.to_string())
}

/// Export a user's expenses to CSV
pub fn export_expenses_csv<W: Write>(
    storage: &Storage,
    user: UserId,
    writer: &mut W,
) -> PlannerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["ID", "Date", "Description", "Category", "Amount"])
        .map_err(csv_err)?;

    for expense in storage.expenses.list(user)? {
        csv_writer
            .write_record([
                expense.id.as_uuid().to_string(),
                expense.created_at.format("%Y-%m-%d").to_string(),
                expense.description.clone(),
                expense.category.to_string(),
                expense.amount.to_string(),
            ])
            .map_err(csv_err)?;
    }

    csv_writer.flush().map_err(|e| PlannerError::Export(e.to_string()))
}

/// Export a user's study tasks to CSV
pub fn export_tasks_csv<W: Write>(
    storage: &Storage,
    user: UserId,
    writer: &mut W,
) -> PlannerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["ID", "Title", "Description", "Due", "Status"])
        .map_err(csv_err)?;

    for task in storage.tasks.list(user)? {
        csv_writer
            .write_record([
                task.id.as_uuid().to_string(),
                task.title.clone(),
                task.description.clone(),
                task.due_date.format("%Y-%m-%d").to_string(),
                task.status.to_string(),
            ])
            .map_err(csv_err)?;
    }

    csv_writer.flush().map_err(|e| PlannerError::Export(e.to_string()))
}

/// Export a user's study reminders to CSV
pub fn export_reminders_csv<W: Write>(
    storage: &Storage,
    user: UserId,
    writer: &mut W,
) -> PlannerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["ID", "Course", "Weekday", "Time"])
        .map_err(csv_err)?;

    for reminder in storage.reminders.list(user)? {
        csv_writer
            .write_record([
                reminder.id.as_uuid().to_string(),
                reminder.course.clone(),
                reminder.weekday.to_string(),
                reminder.time.clone(),
            ])
            .map_err(csv_err)?;
    }

    csv_writer.flush().map_err(|e| PlannerError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlannerPaths;
    use crate::models::{Expense, ExpenseCategory, Money, StudyReminder, Weekday};
    use chrono::Utc;
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_expenses_csv_has_header_and_rows() {
        let (_temp_dir, storage) = test_storage();
        let user = UserId::new();
        storage
            .expenses
            .replace_all(
                user,
                vec![Expense::new(
                    "Lunch, with drink",
                    Money::from_units(700),
                    ExpenseCategory::Food,
                    Utc::now(),
                )],
            )
            .unwrap();

        let mut buffer = Vec::new();
        export_expenses_csv(&storage, user, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.starts_with("ID,Date,Description,Category,Amount"));
        // The comma in the description must be quoted
        assert!(output.contains("\"Lunch, with drink\""));
        assert!(output.contains("700.00"));
    }

    #[test]
    fn test_reminders_csv() {
        let (_temp_dir, storage) = test_storage();
        let user = UserId::new();
        storage
            .reminders
            .add(user, StudyReminder::new("Statistics", Weekday::Thursday, "7PM"))
            .unwrap();

        let mut buffer = Vec::new();
        export_reminders_csv(&storage, user, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("Statistics,Thursday,7PM"));
    }

    #[test]
    fn test_empty_tables_export_header_only() {
        let (_temp_dir, storage) = test_storage();
        let user = UserId::new();

        let mut buffer = Vec::new();
        export_tasks_csv(&storage, user, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(output.trim(), "ID,Title,Description,Due,Status");
    }
}
