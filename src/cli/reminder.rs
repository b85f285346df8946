//! Study reminder CLI commands

use clap::Subcommand;

use crate::display::format_reminder_list;
use crate::error::{PlannerError, PlannerResult};
use crate::models::Weekday;
use crate::services::StudyPlannerService;
use crate::session::SessionStore;
use crate::storage::Storage;

/// Study reminder subcommands
#[derive(Subcommand)]
pub enum ReminderCommands {
    /// Add a recurring weekly study reminder
    Add {
        /// Course name
        course: String,
        /// Day of the week (e.g. Monday)
        weekday: String,
        /// Time of day, free text (e.g. "7PM", "18:30")
        time: String,
    },

    /// List reminders, Monday first
    List,

    /// Delete a reminder by id
    Delete {
        /// Reminder id (full UUID or the "rem-" short form shown in listings)
        id: String,
    },
}

/// Handle a study reminder command
pub fn handle_reminder_command(
    storage: &Storage,
    session: &SessionStore,
    cmd: ReminderCommands,
) -> PlannerResult<()> {
    let user = session.require_user(storage)?;
    let service = StudyPlannerService::new(storage);

    match cmd {
        ReminderCommands::Add {
            course,
            weekday,
            time,
        } => {
            let weekday: Weekday = weekday
                .parse()
                .map_err(|e: crate::models::WeekdayParseError| {
                    PlannerError::Validation(e.to_string())
                })?;

            let reminder = service.add_reminder(user, &course, weekday, &time)?;
            println!(
                "Reminder added: {} on {} at {} ({}).",
                reminder.course, reminder.weekday, reminder.time, reminder.id
            );
        }
        ReminderCommands::List => {
            let reminders = service.list_reminders(user)?;
            print!("{}", format_reminder_list(&reminders));
        }
        ReminderCommands::Delete { id } => {
            let reminders = service.list_reminders(user)?;
            match reminders.iter().find(|r| r.id.matches_input(&id)) {
                Some(reminder) => {
                    service.delete_reminder(user, reminder.id)?;
                    println!("Reminder deleted.");
                }
                None => println!("No reminder with that id; nothing deleted."),
            }
        }
    }

    Ok(())
}
