//! Task domain record.
//!
//! # Responsibility
//! - Define the to-do item shape persisted in `todo_tasks`.
//! - Provide constructor and completion helpers for callers.
//!
//! # Invariants
//! - `id == UNASSIGNED_ID` marks a record the storage layer has not yet
//!   numbered; inserting it assigns a fresh id.
//! - `recurrence_interval` is measured in days and only meaningful when
//!   `is_recurring` is set; positivity is not enforced.

use crate::model::date::Date;
use crate::model::goal::GoalId;
use crate::model::UNASSIGNED_ID;
use serde::{Deserialize, Serialize};

/// Storage-assigned task identifier.
pub type TaskId = i64;

/// A user-created to-do item, optionally recurring, optionally linked to a
/// goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier assigned by the storage layer on creation.
    pub id: TaskId,
    /// Short name shown in lists.
    pub title: String,
    /// Free-form details.
    pub description: String,
    /// Whether the task repeats at regular intervals.
    pub is_recurring: bool,
    /// Days between recurrences when `is_recurring` is set.
    pub recurrence_interval: i64,
    /// Date by which the task should be completed.
    pub deadline: Date,
    /// Completion flag flipped by the toggle operation.
    pub is_complete: bool,
    /// Optional link to a goal this task contributes to.
    pub goal_id: Option<GoalId>,
}

impl Task {
    /// Creates an unpersisted, incomplete, non-recurring task.
    pub fn new(title: impl Into<String>, description: impl Into<String>, deadline: Date) -> Self {
        Self {
            id: UNASSIGNED_ID,
            title: title.into(),
            description: description.into(),
            is_recurring: false,
            recurrence_interval: 0,
            deadline,
            is_complete: false,
            goal_id: None,
        }
    }

    /// Marks the task as repeating every `interval_days` days.
    pub fn recurring_every(mut self, interval_days: i64) -> Self {
        self.is_recurring = true;
        self.recurrence_interval = interval_days;
        self
    }

    /// Links the task to a goal.
    pub fn linked_to(mut self, goal_id: GoalId) -> Self {
        self.goal_id = Some(goal_id);
        self
    }

    /// Flips the completion flag in place.
    pub fn toggle_complete(&mut self) {
        self.is_complete = !self.is_complete;
    }
}

#[cfg(test)]
mod tests {
    use super::Task;
    use crate::model::date::Date;
    use crate::model::UNASSIGNED_ID;

    #[test]
    fn new_task_starts_unassigned_and_incomplete() {
        let task = Task::new("write report", "quarterly numbers", Date::new(6, 1, 2025));
        assert_eq!(task.id, UNASSIGNED_ID);
        assert!(!task.is_complete);
        assert!(!task.is_recurring);
        assert_eq!(task.goal_id, None);
    }

    #[test]
    fn recurring_every_sets_both_fields() {
        let task = Task::new("water plants", "", Date::new(5, 1, 2025)).recurring_every(3);
        assert!(task.is_recurring);
        assert_eq!(task.recurrence_interval, 3);
    }

    #[test]
    fn toggle_complete_flips_back_and_forth() {
        let mut task = Task::new("t", "", Date::new(1, 1, 2025));
        task.toggle_complete();
        assert!(task.is_complete);
        task.toggle_complete();
        assert!(!task.is_complete);
    }
}
