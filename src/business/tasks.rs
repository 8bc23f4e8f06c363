//! Task operations
//!
//! This module provides task management operations for the Tracker.

use tracing::{debug, error, warn};
use crate::error::{Result, TrackerError};
use crate::database::{Task, TaskWithCategory, queries};
use crate::utils::require_non_empty;
use super::tracker::Tracker;

impl Tracker {
    /// Get all tasks joined with their category, in storage order
    pub fn list_tasks(&self) -> Result<Vec<TaskWithCategory>> {
        self.ensure_initialized()?;
        queries::get_all_tasks_with_category(
            self.db.connection(),
            &self.config.uncategorized_label,
            &self.config.uncategorized_color,
        )
        .inspect_err(|e| error!(error = %e, "failed to load tasks"))
    }

    /// Get a task by ID
    pub fn get_task(&self, task_id: i64) -> Result<Option<Task>> {
        self.ensure_initialized()?;
        queries::get_task(self.db.connection(), task_id)
    }

    /// Add a new task, returning its ID
    ///
    /// The title must not be blank and `category_id`, when given, must
    /// name an existing category. New tasks start incomplete.
    pub fn add_task(&mut self, title: &str, description: &str, category_id: Option<i64>) -> Result<i64> {
        self.ensure_initialized()?;

        let title = require_non_empty("Task title", title)
            .inspect_err(|e| warn!(error = %e, "rejected task"))?;

        let conn = self.db.connection();
        if let Some(id) = category_id {
            if !queries::category_exists(conn, id)? {
                warn!(category_id = id, "rejected task with unknown category");
                return Err(TrackerError::CategoryNotFound(id));
            }
        }

        let task_id = queries::create_task(conn, title, Some(description), category_id)
            .inspect_err(|e| error!(error = %e, "failed to add task"))?;

        debug!(task_id, ?category_id, "task added");
        Ok(task_id)
    }

    /// Set the completed flag; returns false if the task does not exist
    pub fn set_task_completed(&mut self, task_id: i64, completed: bool) -> Result<bool> {
        self.ensure_initialized()?;
        let updated = queries::set_task_completed(self.db.connection(), task_id, completed)
            .inspect_err(|e| error!(error = %e, task_id, "failed to update task"))?;

        debug!(task_id, completed, updated, "task completion set");
        Ok(updated)
    }

    /// Flip the completed flag, returning the new state
    ///
    /// Returns `None` if the task does not exist.
    pub fn toggle_task_completed(&mut self, task_id: i64) -> Result<Option<bool>> {
        let Some(task) = self.get_task(task_id)? else {
            return Ok(None);
        };

        let completed = !task.completed;
        self.set_task_completed(task_id, completed)?;
        Ok(Some(completed))
    }

    /// Delete a task; returns false if it did not exist
    pub fn delete_task(&mut self, task_id: i64) -> Result<bool> {
        self.ensure_initialized()?;
        let deleted = queries::delete_task(self.db.connection(), task_id)
            .inspect_err(|e| error!(error = %e, task_id, "failed to delete task"))?;

        debug!(task_id, deleted, "task deleted");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use crate::business::tracker::tests::{create_empty_tracker, create_test_tracker};
    use crate::error::TrackerError;

    #[test]
    fn test_list_tasks_empty_store() {
        let tracker = create_empty_tracker();
        let tasks = tracker.list_tasks().unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_list_seeded_tasks() {
        let tracker = create_test_tracker();
        let tasks = tracker.list_tasks().unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "Finish the presentation");
        assert_eq!(tasks[0].category_name, "Work");
        assert_eq!(tasks[0].category_color, "#e74c3c");
        assert_eq!(tasks[1].title, "Buy groceries");
        assert_eq!(tasks[1].description.as_deref(), Some("Milk, bread, fruit"));
        assert!(tasks.iter().all(|t| !t.completed));
    }

    #[test]
    fn test_add_task_with_category() {
        let mut tracker = create_empty_tracker();
        let category_id = tracker.add_category("Health", "#00ff00").unwrap();
        tracker.add_task("Run 5k", "", Some(category_id)).unwrap();

        let tasks = tracker.list_tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Run 5k");
        assert_eq!(tasks[0].category_name, "Health");
        assert_eq!(tasks[0].category_color, "#00ff00");
        assert_eq!(tasks[0].description.as_deref(), Some(""));
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_add_task_uncategorized_uses_sentinel() {
        let mut tracker = create_empty_tracker();
        tracker.add_task("Loose end", "no category", None).unwrap();

        let tasks = tracker.list_tasks().unwrap();
        assert!(tasks[0].is_uncategorized());
        assert_eq!(tasks[0].category_name, "Uncategorized");
        assert_eq!(tasks[0].category_color, "#cccccc");
    }

    #[test]
    fn test_add_task_empty_title_rejected() {
        let mut tracker = create_empty_tracker();

        let err = tracker.add_task("", "desc", None).unwrap_err();
        assert!(matches!(err, TrackerError::Validation(_)));
        let err = tracker.add_task("   ", "desc", None).unwrap_err();
        assert!(matches!(err, TrackerError::Validation(_)));

        assert!(tracker.list_tasks().unwrap().is_empty());
    }

    #[test]
    fn test_add_task_unknown_category_rejected() {
        let mut tracker = create_empty_tracker();
        let err = tracker.add_task("Orphan", "", Some(404)).unwrap_err();
        assert!(matches!(err, TrackerError::CategoryNotFound(404)));
        assert!(tracker.list_tasks().unwrap().is_empty());
    }

    #[test]
    fn test_add_task_trims_title() {
        let mut tracker = create_empty_tracker();
        let id = tracker.add_task("  Call mom  ", "", None).unwrap();
        assert_eq!(tracker.get_task(id).unwrap().unwrap().title, "Call mom");
    }

    #[test]
    fn test_set_task_completed() {
        let mut tracker = create_empty_tracker();
        let id = tracker.add_task("Write report", "", None).unwrap();

        assert!(tracker.set_task_completed(id, true).unwrap());
        assert!(tracker.get_task(id).unwrap().unwrap().completed);

        assert!(tracker.set_task_completed(id, false).unwrap());
        assert!(!tracker.get_task(id).unwrap().unwrap().completed);
    }

    #[test]
    fn test_set_completed_missing_task_is_noop() {
        let mut tracker = create_empty_tracker();
        assert!(!tracker.set_task_completed(12345, true).unwrap());
        assert!(tracker.list_tasks().unwrap().is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut tracker = create_test_tracker();
        let id = tracker.list_tasks().unwrap()[0].id;

        assert_eq!(tracker.toggle_task_completed(id).unwrap(), Some(true));
        assert_eq!(tracker.toggle_task_completed(id).unwrap(), Some(false));
        assert!(!tracker.get_task(id).unwrap().unwrap().completed);

        assert_eq!(tracker.toggle_task_completed(9999).unwrap(), None);
    }

    #[test]
    fn test_delete_task() {
        let mut tracker = create_test_tracker();
        let id = tracker.list_tasks().unwrap()[0].id;

        assert!(tracker.delete_task(id).unwrap());
        assert!(tracker.get_task(id).unwrap().is_none());
        assert_eq!(tracker.list_tasks().unwrap().len(), 1);

        // Second delete is a silent no-op
        assert!(!tracker.delete_task(id).unwrap());
    }
}
