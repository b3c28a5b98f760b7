//! Goal domain record.
//!
//! # Responsibility
//! - Define the objective shape persisted in `goals`.
//!
//! # Invariants
//! - `id == UNASSIGNED_ID` marks a record the storage layer has not yet
//!   numbered.
//! - `target` is an optional progress count; it carries no semantics at the
//!   storage layer.

use crate::model::date::Date;
use crate::model::task::TaskId;
use crate::model::UNASSIGNED_ID;
use serde::{Deserialize, Serialize};

/// Storage-assigned goal identifier.
pub type GoalId = i64;

/// A user-created objective with a deadline and completion state, optionally
/// linked to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier assigned by the storage layer on creation.
    pub id: GoalId,
    /// Short name shown in lists.
    pub title: String,
    /// Free-form details.
    pub description: String,
    /// Optional target count (e.g. "read 12 books").
    pub target: Option<i64>,
    /// Date the goal was created.
    pub created_on: Date,
    /// Target date for completing the goal.
    pub deadline: Date,
    /// Completion flag flipped by the toggle operation.
    pub is_complete: bool,
    /// Optional link to a task that works toward this goal.
    pub task_id: Option<TaskId>,
}

impl Goal {
    /// Creates an unpersisted, incomplete goal.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        created_on: Date,
        deadline: Date,
    ) -> Self {
        Self {
            id: UNASSIGNED_ID,
            title: title.into(),
            description: description.into(),
            target: None,
            created_on,
            deadline,
            is_complete: false,
            task_id: None,
        }
    }

    /// Sets the optional target count.
    pub fn with_target(mut self, target: i64) -> Self {
        self.target = Some(target);
        self
    }

    /// Links the goal to a task.
    pub fn linked_to(mut self, task_id: TaskId) -> Self {
        self.task_id = Some(task_id);
        self
    }

    /// Flips the completion flag in place.
    pub fn toggle_complete(&mut self) {
        self.is_complete = !self.is_complete;
    }
}

#[cfg(test)]
mod tests {
    use super::Goal;
    use crate::model::date::Date;
    use crate::model::UNASSIGNED_ID;

    #[test]
    fn new_goal_starts_unassigned_without_target_or_link() {
        let goal = Goal::new(
            "run a marathon",
            "train three times a week",
            Date::new(1, 10, 2025),
            Date::new(10, 1, 2025),
        );
        assert_eq!(goal.id, UNASSIGNED_ID);
        assert_eq!(goal.target, None);
        assert_eq!(goal.task_id, None);
        assert!(!goal.is_complete);
    }

    #[test]
    fn with_target_and_link_set_optional_fields() {
        let goal = Goal::new("read books", "", Date::new(1, 1, 2025), Date::new(12, 31, 2025))
            .with_target(12)
            .linked_to(7);
        assert_eq!(goal.target, Some(12));
        assert_eq!(goal.task_id, Some(7));
    }
}
