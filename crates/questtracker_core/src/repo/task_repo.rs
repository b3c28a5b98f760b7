//! Task repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and toggle APIs over the `todo_tasks` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Inserting a task with the unassigned id creates a fresh row and returns
//!   the storage-assigned id; a nonzero id replaces the existing row.
//! - Toggle is a read-modify-write; a missing id is silently ignored.

use crate::model::task::{Task, TaskId};
use crate::model::UNASSIGNED_ID;
use crate::repo::{bool_to_int, ensure_connection_ready, parse_bool, parse_date, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const TASK_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    is_recurring,
    recurrence_interval,
    deadline,
    is_complete,
    goal_id
FROM todo_tasks";

const TASK_COLUMNS: &[&str] = &[
    "id",
    "title",
    "description",
    "is_recurring",
    "recurrence_interval",
    "deadline",
    "is_complete",
    "goal_id",
];

/// Query options for listing tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListQuery {
    /// Optional case-insensitive title substring filter.
    pub search: Option<String>,
}

/// Repository interface for task CRUD and toggle operations.
pub trait TaskRepository {
    /// Inserts a task and returns its storage-assigned id.
    fn insert_task(&self, task: &Task) -> RepoResult<TaskId>;
    /// Replaces the full record for the task's id. Missing ids are ignored.
    fn update_task(&self, task: &Task) -> RepoResult<()>;
    /// Deletes a task by id. Missing ids are ignored.
    fn delete_task(&self, id: TaskId) -> RepoResult<()>;
    /// Gets one task by id.
    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>>;
    /// Lists tasks in stable id order, optionally filtered by title.
    fn list_tasks(&self, query: &TaskListQuery) -> RepoResult<Vec<Task>>;
    /// Flips `is_complete` by id. Missing ids are silently ignored.
    fn toggle_task(&self, id: TaskId) -> RepoResult<()>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "todo_tasks", TASK_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn insert_task(&self, task: &Task) -> RepoResult<TaskId> {
        if task.id == UNASSIGNED_ID {
            self.conn.execute(
                "INSERT INTO todo_tasks (
                    title,
                    description,
                    is_recurring,
                    recurrence_interval,
                    deadline,
                    is_complete,
                    goal_id
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
                params![
                    task.title.as_str(),
                    task.description.as_str(),
                    bool_to_int(task.is_recurring),
                    task.recurrence_interval,
                    task.deadline.to_string(),
                    bool_to_int(task.is_complete),
                    task.goal_id,
                ],
            )?;
            return Ok(self.conn.last_insert_rowid());
        }

        // Nonzero id keeps replace-on-conflict insert semantics.
        self.conn.execute(
            "INSERT OR REPLACE INTO todo_tasks (
                id,
                title,
                description,
                is_recurring,
                recurrence_interval,
                deadline,
                is_complete,
                goal_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                task.id,
                task.title.as_str(),
                task.description.as_str(),
                bool_to_int(task.is_recurring),
                task.recurrence_interval,
                task.deadline.to_string(),
                bool_to_int(task.is_complete),
                task.goal_id,
            ],
        )?;
        Ok(task.id)
    }

    fn update_task(&self, task: &Task) -> RepoResult<()> {
        self.conn.execute(
            "UPDATE todo_tasks
             SET
                title = ?1,
                description = ?2,
                is_recurring = ?3,
                recurrence_interval = ?4,
                deadline = ?5,
                is_complete = ?6,
                goal_id = ?7
             WHERE id = ?8;",
            params![
                task.title.as_str(),
                task.description.as_str(),
                bool_to_int(task.is_recurring),
                task.recurrence_interval,
                task.deadline.to_string(),
                bool_to_int(task.is_complete),
                task.goal_id,
                task.id,
            ],
        )?;
        Ok(())
    }

    fn delete_task(&self, id: TaskId) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM todo_tasks WHERE id = ?1;", [id])?;
        Ok(())
    }

    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }

        Ok(None)
    }

    fn list_tasks(&self, query: &TaskListQuery) -> RepoResult<Vec<Task>> {
        let mut sql = format!("{TASK_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(search) = query.search.as_ref() {
            sql.push_str(" AND title LIKE ? COLLATE NOCASE");
            bind_values.push(Value::Text(format!("%{search}%")));
        }

        sql.push_str(" ORDER BY id ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut tasks = Vec::new();

        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn toggle_task(&self, id: TaskId) -> RepoResult<()> {
        // Read-modify-write; a missing id means there is nothing to flip.
        let Some(mut task) = self.get_task(id)? else {
            return Ok(());
        };
        task.toggle_complete();
        self.update_task(&task)
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let deadline_text: String = row.get("deadline")?;

    Ok(Task {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        is_recurring: parse_bool(
            row.get::<_, i64>("is_recurring")?,
            "todo_tasks",
            "is_recurring",
        )?,
        recurrence_interval: row.get("recurrence_interval")?,
        deadline: parse_date(&deadline_text, "todo_tasks", "deadline")?,
        is_complete: parse_bool(
            row.get::<_, i64>("is_complete")?,
            "todo_tasks",
            "is_complete",
        )?,
        goal_id: row.get("goal_id")?,
    })
}
