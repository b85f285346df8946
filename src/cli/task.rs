//! Study task CLI commands

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::display::{format_task_details, format_task_list};
use crate::error::{PlannerError, PlannerResult};
use crate::models::{TaskId, TaskStatus};
use crate::services::StudyPlannerService;
use crate::session::SessionStore;
use crate::storage::Storage;

/// Study task subcommands
#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a new study task
    Add {
        /// Task title
        title: String,
        /// Due date (YYYY-MM-DD)
        due: String,
        /// Longer description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// List study tasks, soonest due first
    List,

    /// Change a task's status
    Status {
        /// Task id (full UUID or the "task-" short form shown in listings)
        id: String,
        /// New status: pending, in-progress, or completed
        status: String,
    },

    /// Delete a task by id
    Delete {
        /// Task id
        id: String,
    },
}

fn resolve_task_id(
    service: &StudyPlannerService,
    user: crate::models::UserId,
    input: &str,
) -> PlannerResult<Option<TaskId>> {
    Ok(service
        .list_tasks(user)?
        .iter()
        .find(|t| t.id.matches_input(input))
        .map(|t| t.id))
}

/// Handle a study task command
pub fn handle_task_command(
    storage: &Storage,
    session: &SessionStore,
    cmd: TaskCommands,
) -> PlannerResult<()> {
    let user = session.require_user(storage)?;
    let service = StudyPlannerService::new(storage);
    let today = Local::now().date_naive();

    match cmd {
        TaskCommands::Add {
            title,
            due,
            description,
        } => {
            let due_date = NaiveDate::parse_from_str(&due, "%Y-%m-%d").map_err(|_| {
                PlannerError::Validation(format!("'{}' is not a date (expected YYYY-MM-DD)", due))
            })?;

            let task = service.add_task(user, &title, &description, due_date)?;
            println!("Task added:");
            print!("{}", format_task_details(&task));
        }
        TaskCommands::List => {
            let tasks = service.list_tasks(user)?;
            print!("{}", format_task_list(&tasks, today));
        }
        TaskCommands::Status { id, status } => {
            let status: TaskStatus = status
                .parse()
                .map_err(|e: crate::models::StatusParseError| {
                    PlannerError::Validation(e.to_string())
                })?;

            match resolve_task_id(&service, user, &id)? {
                Some(id) => {
                    // Resolved against the live list, so the update cannot miss
                    if let Some(task) = service.set_task_status(user, id, status)? {
                        println!("Task '{}' is now {}.", task.title, task.status);
                    }
                }
                None => println!("No task with that id; nothing changed."),
            }
        }
        TaskCommands::Delete { id } => {
            match resolve_task_id(&service, user, &id)? {
                Some(id) => {
                    service.delete_task(user, id)?;
                    println!("Task deleted.");
                }
                None => println!("No task with that id; nothing deleted."),
            }
        }
    }

    Ok(())
}
