//! Category operations
//!
//! This module provides category management operations for the Tracker.

use tracing::{debug, error, warn};
use crate::error::{Result, TrackerError};
use crate::database::{Category, queries};
use crate::utils::{normalize_color, require_non_empty};
use super::tracker::Tracker;

impl Tracker {
    /// Get all categories in storage order
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        self.ensure_initialized()?;
        queries::get_all_categories(self.db.connection())
            .inspect_err(|e| error!(error = %e, "failed to load categories"))
    }

    /// Get a category by ID
    pub fn get_category(&self, category_id: i64) -> Result<Option<Category>> {
        self.ensure_initialized()?;
        queries::get_category(self.db.connection(), category_id)
    }

    /// Add a new category, returning its ID
    ///
    /// A blank color falls back to the default green.
    pub fn add_category(&mut self, name: &str, color: &str) -> Result<i64> {
        self.ensure_initialized()?;

        let (name, color) = require_non_empty("Category name", name)
            .and_then(|name| normalize_color(Some(color)).map(|color| (name, color)))
            .inspect_err(|e| warn!(error = %e, "rejected category"))?;

        let category_id = queries::create_category(self.db.connection(), name, &color)
            .inspect_err(|e| error!(error = %e, "failed to add category"))?;

        debug!(category_id, name, %color, "category added");
        Ok(category_id)
    }

    /// Delete a category, uncategorizing the tasks that used it
    ///
    /// Both steps commit together or not at all. Returns the number of
    /// tasks whose category was cleared; deleting a missing category
    /// returns 0.
    pub fn delete_category(&mut self, category_id: i64) -> Result<usize> {
        self.ensure_initialized()?;

        if self.db.in_transaction() {
            return Err(TrackerError::DatabaseError(
                "A transaction is already open".to_string(),
            ));
        }

        self.db.begin_transaction()?;

        let result = (|| -> Result<(usize, bool)> {
            let conn = self.db.connection();
            let uncategorized = queries::uncategorize_tasks(conn, category_id)?;
            let removed = queries::delete_category_row(conn, category_id)?;
            self.db.commit_transaction()?;
            Ok((uncategorized, removed))
        })();

        match result {
            Ok((uncategorized, removed)) => {
                debug!(category_id, uncategorized, removed, "category deleted");
                Ok(uncategorized)
            }
            Err(e) => {
                error!(error = %e, category_id, "failed to delete category, rolling back");
                self.db.rollback_if_open();
                Err(e)
            }
        }
    }
}
