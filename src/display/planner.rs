//! Study task and reminder display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use chrono::NaiveDate;

use crate::models::{StudyReminder, StudyTask};

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Title")]
    title: String,
}

#[derive(Tabled)]
struct ReminderRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Course")]
    course: String,
}

/// Format a list of study tasks as a table
pub fn format_task_list(tasks: &[StudyTask], today: NaiveDate) -> String {
    if tasks.is_empty() {
        return "No study tasks planned. Add one with 'campus task add'.\n".to_string();
    }

    let rows: Vec<TaskRow> = tasks
        .iter()
        .map(|t| TaskRow {
            id: t.id.to_string(),
            due: if t.is_overdue(today) {
                format!("{} (overdue)", t.due_date.format("%Y-%m-%d"))
            } else {
                t.due_date.format("%Y-%m-%d").to_string()
            },
            status: t.status.to_string(),
            title: t.title.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// Format task details
pub fn format_task_details(task: &StudyTask) -> String {
    let mut output = String::new();

    output.push_str(&format!("Task:    {}\n", task.id));
    output.push_str(&format!("Title:   {}\n", task.title));
    if !task.description.is_empty() {
        output.push_str(&format!("Details: {}\n", task.description));
    }
    output.push_str(&format!("Due:     {}\n", task.due_date.format("%Y-%m-%d")));
    output.push_str(&format!("Status:  {}\n", task.status));

    output
}

/// Format a list of study reminders as a table
pub fn format_reminder_list(reminders: &[StudyReminder]) -> String {
    if reminders.is_empty() {
        return "No reminders set. Add one with 'campus reminder add'.\n".to_string();
    }

    let rows: Vec<ReminderRow> = reminders
        .iter()
        .map(|r| ReminderRow {
            id: r.id.to_string(),
            day: r.weekday.to_string(),
            time: r.time.clone(),
            course: r.course.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_lists() {
        assert!(format_task_list(&[], date(2025, 5, 1)).contains("No study tasks"));
        assert!(format_reminder_list(&[]).contains("No reminders"));
    }

    #[test]
    fn test_overdue_marker() {
        let task = StudyTask::new("Essay", "", date(2025, 5, 1));
        let output = format_task_list(std::slice::from_ref(&task), date(2025, 5, 3));
        assert!(output.contains("overdue"));
    }

    #[test]
    fn test_reminder_table_contains_fields() {
        let reminders = vec![StudyReminder::new("Statistics", Weekday::Thursday, "7PM")];
        let output = format_reminder_list(&reminders);
        assert!(output.contains("Statistics"));
        assert!(output.contains("Thursday"));
        assert!(output.contains("7PM"));
    }
}
