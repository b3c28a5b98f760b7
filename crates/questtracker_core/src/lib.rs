//! Core domain logic for QuestTracker.
//! This crate is the single source of truth for task/goal persistence.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::date::{Date, DateParseError};
pub use model::goal::{Goal, GoalId};
pub use model::task::{Task, TaskId};
pub use model::UNASSIGNED_ID;
pub use repo::goal_repo::{GoalRepository, SqliteGoalRepository};
pub use repo::task_repo::{SqliteTaskRepository, TaskListQuery, TaskRepository};
pub use repo::{RepoError, RepoResult};
pub use service::goal_service::GoalService;
pub use service::task_service::TaskService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
