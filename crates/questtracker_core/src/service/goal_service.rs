//! Goal use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD/toggle entry points for presentation callers.
//! - Delegate persistence to repository implementations.

use crate::model::goal::{Goal, GoalId};
use crate::repo::goal_repo::GoalRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for goal operations.
pub struct GoalService<R: GoalRepository> {
    repo: R,
}

impl<R: GoalRepository> GoalService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a goal and returns its storage-assigned id.
    pub fn add(&self, goal: &Goal) -> RepoResult<GoalId> {
        self.repo.insert_goal(goal)
    }

    /// Replaces the full record for the goal's id.
    pub fn update(&self, goal: &Goal) -> RepoResult<()> {
        self.repo.update_goal(goal)
    }

    /// Deletes a goal by id.
    pub fn delete(&self, id: GoalId) -> RepoResult<()> {
        self.repo.delete_goal(id)
    }

    /// Gets one goal by id.
    pub fn get(&self, id: GoalId) -> RepoResult<Option<Goal>> {
        self.repo.get_goal(id)
    }

    /// Lists all goals.
    pub fn list(&self) -> RepoResult<Vec<Goal>> {
        self.repo.list_goals()
    }

    /// Flips a goal's completion flag.
    ///
    /// # Contract
    /// - The flip happens in a single in-database statement.
    /// - A missing id is silently ignored.
    pub fn toggle(&self, id: GoalId) -> RepoResult<()> {
        self.repo.toggle_goal(id)
    }
}
