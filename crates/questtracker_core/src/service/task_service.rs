//! Task use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD/toggle entry points for presentation callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::{TaskListQuery, TaskRepository};
use crate::repo::RepoResult;

/// Use-case service wrapper for task operations.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a task and returns its storage-assigned id.
    pub fn add(&self, task: &Task) -> RepoResult<TaskId> {
        self.repo.insert_task(task)
    }

    /// Replaces the full record for the task's id.
    pub fn update(&self, task: &Task) -> RepoResult<()> {
        self.repo.update_task(task)
    }

    /// Deletes a task by id.
    pub fn delete(&self, id: TaskId) -> RepoResult<()> {
        self.repo.delete_task(id)
    }

    /// Gets one task by id.
    pub fn get(&self, id: TaskId) -> RepoResult<Option<Task>> {
        self.repo.get_task(id)
    }

    /// Lists tasks using the query filter.
    pub fn list(&self, query: &TaskListQuery) -> RepoResult<Vec<Task>> {
        self.repo.list_tasks(query)
    }

    /// Flips a task's completion flag.
    ///
    /// # Contract
    /// - A missing id is silently ignored.
    pub fn toggle(&self, id: TaskId) -> RepoResult<()> {
        self.repo.toggle_task(id)
    }
}
