//! Data models for tracker database entities

use serde::{Deserialize, Serialize};

/// Task category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// System-assigned identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Hex color (e.g. "#4CAF50")
    pub color: String,
}

/// Task row as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// System-assigned identifier
    pub id: i64,
    /// Title, never empty
    pub title: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Completion flag
    pub completed: bool,
    /// Category reference, absent when uncategorized
    pub category_id: Option<i64>,
}

/// Task joined with its category for display
///
/// `category_name` and `category_color` hold the uncategorized sentinel
/// when `category_id` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskWithCategory {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub category_id: Option<i64>,
    pub category_name: String,
    pub category_color: String,
}

impl TaskWithCategory {
    /// Check whether the task has no category
    pub fn is_uncategorized(&self) -> bool {
        self.category_id.is_none()
    }

    /// Drop the display columns
    pub fn into_task(self) -> Task {
        Task {
            id: self.id,
            title: self.title,
            description: self.description,
            completed: self.completed,
            category_id: self.category_id,
        }
    }
}

/// Row counts for the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub total_categories: u32,
}

impl StoreStats {
    /// Tasks not yet completed
    pub fn open_tasks(&self) -> u32 {
        self.total_tasks.saturating_sub(self.completed_tasks)
    }
}
