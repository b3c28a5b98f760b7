//! Goal repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and toggle APIs over the `goals` table.
//!
//! # Invariants
//! - Goal toggle is a single in-database statement, not a read-modify-write.
//! - Mutations targeting a missing id are silent no-ops.

use crate::model::goal::{Goal, GoalId};
use crate::model::UNASSIGNED_ID;
use crate::repo::{bool_to_int, ensure_connection_ready, parse_bool, parse_date, RepoResult};
use rusqlite::{params, Connection, Row};

const GOAL_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    target,
    created_on,
    deadline,
    is_complete,
    task_id
FROM goals";

const GOAL_COLUMNS: &[&str] = &[
    "id",
    "title",
    "description",
    "target",
    "created_on",
    "deadline",
    "is_complete",
    "task_id",
];

/// Repository interface for goal CRUD and toggle operations.
pub trait GoalRepository {
    /// Inserts a goal and returns its storage-assigned id.
    fn insert_goal(&self, goal: &Goal) -> RepoResult<GoalId>;
    /// Replaces the full record for the goal's id. Missing ids are ignored.
    fn update_goal(&self, goal: &Goal) -> RepoResult<()>;
    /// Deletes a goal by id. Missing ids are ignored.
    fn delete_goal(&self, id: GoalId) -> RepoResult<()>;
    /// Gets one goal by id.
    fn get_goal(&self, id: GoalId) -> RepoResult<Option<Goal>>;
    /// Lists all goals in stable id order.
    fn list_goals(&self) -> RepoResult<Vec<Goal>>;
    /// Flips `is_complete` by id. Missing ids are silently ignored.
    fn toggle_goal(&self, id: GoalId) -> RepoResult<()>;
}

/// SQLite-backed goal repository.
pub struct SqliteGoalRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteGoalRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "goals", GOAL_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl GoalRepository for SqliteGoalRepository<'_> {
    fn insert_goal(&self, goal: &Goal) -> RepoResult<GoalId> {
        if goal.id == UNASSIGNED_ID {
            self.conn.execute(
                "INSERT INTO goals (
                    title,
                    description,
                    target,
                    created_on,
                    deadline,
                    is_complete,
                    task_id
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
                params![
                    goal.title.as_str(),
                    goal.description.as_str(),
                    goal.target,
                    goal.created_on.to_string(),
                    goal.deadline.to_string(),
                    bool_to_int(goal.is_complete),
                    goal.task_id,
                ],
            )?;
            return Ok(self.conn.last_insert_rowid());
        }

        self.conn.execute(
            "INSERT OR REPLACE INTO goals (
                id,
                title,
                description,
                target,
                created_on,
                deadline,
                is_complete,
                task_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                goal.id,
                goal.title.as_str(),
                goal.description.as_str(),
                goal.target,
                goal.created_on.to_string(),
                goal.deadline.to_string(),
                bool_to_int(goal.is_complete),
                goal.task_id,
            ],
        )?;
        Ok(goal.id)
    }

    fn update_goal(&self, goal: &Goal) -> RepoResult<()> {
        self.conn.execute(
            "UPDATE goals
             SET
                title = ?1,
                description = ?2,
                target = ?3,
                created_on = ?4,
                deadline = ?5,
                is_complete = ?6,
                task_id = ?7
             WHERE id = ?8;",
            params![
                goal.title.as_str(),
                goal.description.as_str(),
                goal.target,
                goal.created_on.to_string(),
                goal.deadline.to_string(),
                bool_to_int(goal.is_complete),
                goal.task_id,
                goal.id,
            ],
        )?;
        Ok(())
    }

    fn delete_goal(&self, id: GoalId) -> RepoResult<()> {
        self.conn.execute("DELETE FROM goals WHERE id = ?1;", [id])?;
        Ok(())
    }

    fn get_goal(&self, id: GoalId) -> RepoResult<Option<Goal>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{GOAL_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_goal_row(row)?));
        }

        Ok(None)
    }

    fn list_goals(&self) -> RepoResult<Vec<Goal>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{GOAL_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut goals = Vec::new();

        while let Some(row) = rows.next()? {
            goals.push(parse_goal_row(row)?);
        }

        Ok(goals)
    }

    fn toggle_goal(&self, id: GoalId) -> RepoResult<()> {
        // Single-statement flip; zero affected rows means the id is unknown
        // and the operation is a no-op.
        self.conn.execute(
            "UPDATE goals SET is_complete = NOT is_complete WHERE id = ?1;",
            [id],
        )?;
        Ok(())
    }
}

fn parse_goal_row(row: &Row<'_>) -> RepoResult<Goal> {
    let created_on_text: String = row.get("created_on")?;
    let deadline_text: String = row.get("deadline")?;

    Ok(Goal {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        target: row.get("target")?,
        created_on: parse_date(&created_on_text, "goals", "created_on")?,
        deadline: parse_date(&deadline_text, "goals", "deadline")?,
        is_complete: parse_bool(row.get::<_, i64>("is_complete")?, "goals", "is_complete")?,
        task_id: row.get("task_id")?,
    })
}
