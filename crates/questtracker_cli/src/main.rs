//! `quest` command-line interface.
//!
//! # Responsibility
//! - Expose task/goal add/list/show/edit/delete/toggle over the core
//!   services.
//! - Render lists as tables (or JSON) for terminal use.

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::{Args, Parser, Subcommand};
use questtracker_core::db::open_db;
use questtracker_core::{
    default_log_level, init_logging, Date, Goal, GoalService, SqliteGoalRepository,
    SqliteTaskRepository, Task, TaskListQuery, TaskService,
};
use std::path::PathBuf;
use tabled::{Table, Tabled};

/// Truncate a string to a maximum number of characters (not bytes), so
/// multi-byte titles never panic on slicing.
fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

#[derive(Parser)]
#[command(name = "quest")]
#[command(about = "Personal task and goal tracker", long_about = None)]
struct Cli {
    /// Database file path (defaults to the platform data directory)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage to-do tasks
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },
    /// Manage goals
    Goal {
        #[command(subcommand)]
        action: GoalAction,
    },
}

#[derive(Subcommand)]
enum TaskAction {
    /// Add a new task
    Add {
        /// Task title
        title: String,
        /// Task description
        #[arg(long, default_value = "")]
        description: String,
        /// Deadline as M-D-YYYY
        #[arg(long)]
        deadline: String,
        /// Mark the task as recurring
        #[arg(long)]
        recurring: bool,
        /// Recurrence interval in days
        #[arg(long, value_name = "DAYS", default_value_t = 0)]
        every: i64,
        /// Link to a goal id
        #[arg(long)]
        goal: Option<i64>,
    },
    /// List tasks
    List {
        /// Filter by title substring (case-insensitive)
        #[arg(long)]
        search: Option<String>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one task in full
    Show { id: i64 },
    /// Edit fields of an existing task
    Edit(TaskEdit),
    /// Delete a task
    Delete { id: i64 },
    /// Flip a task's completion flag
    Toggle { id: i64 },
}

#[derive(Args)]
struct TaskEdit {
    id: i64,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Deadline as M-D-YYYY
    #[arg(long)]
    deadline: Option<String>,
    /// true/false
    #[arg(long)]
    recurring: Option<bool>,
    #[arg(long, value_name = "DAYS")]
    every: Option<i64>,
    /// Link to a goal id
    #[arg(long)]
    goal: Option<i64>,
    /// Remove the goal link
    #[arg(long)]
    clear_goal: bool,
}

#[derive(Subcommand)]
enum GoalAction {
    /// Add a new goal
    Add {
        /// Goal title
        title: String,
        /// Goal description
        #[arg(long, default_value = "")]
        description: String,
        /// Deadline as M-D-YYYY
        #[arg(long)]
        deadline: String,
        /// Optional target count
        #[arg(long)]
        target: Option<i64>,
        /// Link to a task id
        #[arg(long)]
        task: Option<i64>,
    },
    /// List goals
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one goal in full
    Show { id: i64 },
    /// Edit fields of an existing goal
    Edit(GoalEdit),
    /// Delete a goal
    Delete { id: i64 },
    /// Flip a goal's completion flag
    Toggle { id: i64 },
}

#[derive(Args)]
struct GoalEdit {
    id: i64,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Deadline as M-D-YYYY
    #[arg(long)]
    deadline: Option<String>,
    #[arg(long)]
    target: Option<i64>,
    /// Link to a task id
    #[arg(long)]
    task: Option<i64>,
    /// Remove the task link
    #[arg(long)]
    clear_task: bool,
}

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Done")]
    done: &'static str,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
    #[tabled(rename = "Repeats")]
    repeats: String,
    #[tabled(rename = "Goal")]
    goal: String,
}

impl TaskRow {
    fn from_task(task: &Task) -> Self {
        Self {
            id: task.id,
            done: if task.is_complete { "x" } else { " " },
            title: truncate_str(&task.title, 40),
            deadline: task.deadline.to_string(),
            repeats: if task.is_recurring {
                format!("every {}d", task.recurrence_interval)
            } else {
                "-".to_string()
            },
            goal: task
                .goal_id
                .map_or_else(|| "-".to_string(), |id| format!("#{id}")),
        }
    }
}

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Done")]
    done: &'static str,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
    #[tabled(rename = "Task")]
    task: String,
}

impl GoalRow {
    fn from_goal(goal: &Goal) -> Self {
        Self {
            id: goal.id,
            done: if goal.is_complete { "x" } else { " " },
            title: truncate_str(&goal.title, 40),
            target: goal
                .target
                .map_or_else(|| "-".to_string(), |t| t.to_string()),
            created: goal.created_on.to_string(),
            deadline: goal.deadline.to_string(),
            task: goal
                .task_id
                .map_or_else(|| "-".to_string(), |id| format!("#{id}")),
        }
    }
}

fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("questtracker")
        .join("questtracker.db")
}

fn parse_date(value: &str) -> Result<Date> {
    value
        .parse::<Date>()
        .with_context(|| format!("invalid date `{value}`"))
}

fn today() -> Date {
    let now = Local::now();
    Date::new(now.month(), now.day(), now.year())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let db_path = cli.db.unwrap_or_else(default_db_path);
    if let Some(parent) = db_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create data directory `{}`", parent.display()))?;

        // init_logging requires an absolute directory.
        let log_dir = std::path::absolute(parent.join("logs")).unwrap_or_default();
        if let Some(log_dir_str) = log_dir.to_str() {
            // Logging is best effort; the CLI stays usable without it.
            if let Err(err) = init_logging(default_log_level(), log_dir_str) {
                eprintln!("warning: logging disabled: {err}");
            }
        }
    }

    let conn = open_db(&db_path)
        .with_context(|| format!("failed to open database `{}`", db_path.display()))?;

    match cli.command {
        Commands::Task { action } => {
            let service = TaskService::new(SqliteTaskRepository::try_new(&conn)?);
            run_task_action(&service, action)
        }
        Commands::Goal { action } => {
            let service = GoalService::new(SqliteGoalRepository::try_new(&conn)?);
            run_goal_action(&service, action)
        }
    }
}

fn run_task_action(
    service: &TaskService<SqliteTaskRepository<'_>>,
    action: TaskAction,
) -> Result<()> {
    match action {
        TaskAction::Add {
            title,
            description,
            deadline,
            recurring,
            every,
            goal,
        } => {
            let mut task = Task::new(title, description, parse_date(&deadline)?);
            if recurring || every > 0 {
                task = task.recurring_every(every);
            }
            task.goal_id = goal;

            let id = service.add(&task)?;
            log::info!("event=task_add module=cli status=ok id={id}");
            println!("added task #{id}");
        }
        TaskAction::List { search, json } => {
            let tasks = service.list(&TaskListQuery { search })?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else if tasks.is_empty() {
                println!("no tasks");
            } else {
                let rows: Vec<TaskRow> = tasks.iter().map(TaskRow::from_task).collect();
                println!("{}", Table::new(rows));
            }
        }
        TaskAction::Show { id } => match service.get(id)? {
            Some(task) => {
                println!("{}", serde_json::to_string_pretty(&task)?);
            }
            None => println!("task #{id} not found"),
        },
        TaskAction::Edit(edit) => {
            let Some(mut task) = service.get(edit.id)? else {
                println!("task #{} not found", edit.id);
                return Ok(());
            };

            if let Some(title) = edit.title {
                task.title = title;
            }
            if let Some(description) = edit.description {
                task.description = description;
            }
            if let Some(deadline) = edit.deadline {
                task.deadline = parse_date(&deadline)?;
            }
            if let Some(recurring) = edit.recurring {
                task.is_recurring = recurring;
            }
            if let Some(every) = edit.every {
                task.recurrence_interval = every;
            }
            if edit.clear_goal {
                task.goal_id = None;
            } else if edit.goal.is_some() {
                task.goal_id = edit.goal;
            }

            service.update(&task)?;
            log::info!("event=task_edit module=cli status=ok id={}", task.id);
            println!("updated task #{}", task.id);
        }
        TaskAction::Delete { id } => {
            match service.get(id)? {
                Some(task) => {
                    service.delete(id)?;
                    log::info!("event=task_delete module=cli status=ok id={id}");
                    println!("deleted task #{id} ({})", truncate_str(&task.title, 40));
                }
                None => println!("task #{id} not found"),
            };
        }
        TaskAction::Toggle { id } => {
            service.toggle(id)?;
            match service.get(id)? {
                Some(task) => println!(
                    "task #{id} is now {}",
                    if task.is_complete { "complete" } else { "open" }
                ),
                None => println!("task #{id} not found; nothing to toggle"),
            }
        }
    }

    Ok(())
}

fn run_goal_action(
    service: &GoalService<SqliteGoalRepository<'_>>,
    action: GoalAction,
) -> Result<()> {
    match action {
        GoalAction::Add {
            title,
            description,
            deadline,
            target,
            task,
        } => {
            let mut goal = Goal::new(title, description, today(), parse_date(&deadline)?);
            goal.target = target;
            goal.task_id = task;

            let id = service.add(&goal)?;
            log::info!("event=goal_add module=cli status=ok id={id}");
            println!("added goal #{id}");
        }
        GoalAction::List { json } => {
            let goals = service.list()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&goals)?);
            } else if goals.is_empty() {
                println!("no goals");
            } else {
                let rows: Vec<GoalRow> = goals.iter().map(GoalRow::from_goal).collect();
                println!("{}", Table::new(rows));
            }
        }
        GoalAction::Show { id } => match service.get(id)? {
            Some(goal) => {
                println!("{}", serde_json::to_string_pretty(&goal)?);
            }
            None => println!("goal #{id} not found"),
        },
        GoalAction::Edit(edit) => {
            let Some(mut goal) = service.get(edit.id)? else {
                println!("goal #{} not found", edit.id);
                return Ok(());
            };

            if let Some(title) = edit.title {
                goal.title = title;
            }
            if let Some(description) = edit.description {
                goal.description = description;
            }
            if let Some(deadline) = edit.deadline {
                goal.deadline = parse_date(&deadline)?;
            }
            if edit.target.is_some() {
                goal.target = edit.target;
            }
            if edit.clear_task {
                goal.task_id = None;
            } else if edit.task.is_some() {
                goal.task_id = edit.task;
            }

            service.update(&goal)?;
            log::info!("event=goal_edit module=cli status=ok id={}", goal.id);
            println!("updated goal #{}", goal.id);
        }
        GoalAction::Delete { id } => {
            match service.get(id)? {
                Some(goal) => {
                    service.delete(id)?;
                    log::info!("event=goal_delete module=cli status=ok id={id}");
                    println!("deleted goal #{id} ({})", truncate_str(&goal.title, 40));
                }
                None => println!("goal #{id} not found"),
            };
        }
        GoalAction::Toggle { id } => {
            service.toggle(id)?;
            match service.get(id)? {
                Some(goal) => println!(
                    "goal #{id} is now {}",
                    if goal.is_complete { "complete" } else { "open" }
                ),
                None => println!("goal #{id} not found; nothing to toggle"),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::truncate_str;

    #[test]
    fn truncate_str_counts_chars_not_bytes() {
        assert_eq!(truncate_str("héllo wörld", 5), "héllo...");
        assert_eq!(truncate_str("short", 10), "short");
    }
}
