//! # Task Tracker Core
//!
//! An in-memory task and category store backed by SQLite.
//!
//! ## Features
//!
//! - Tasks with optional categories and completion state
//! - Categories whose deletion uncategorizes tasks instead of removing them
//! - Snapshot export/import in SQLite's native file format
//! - Raw SQL diagnostics (`diagnostics` feature)
//!
//! ## Example
//!
//! ```no_run
//! use tasktracker::{Tracker, TrackerConfig};
//!
//! let mut tracker = Tracker::open(TrackerConfig::default()).unwrap();
//! let health = tracker.add_category("Health", "#00ff00").unwrap();
//! tracker.add_task("Run 5k", "", Some(health)).unwrap();
//!
//! for task in tracker.list_tasks().unwrap() {
//!     println!("[{}] {}: {}", task.category_name, task.id, task.title);
//! }
//!
//! let snapshot = tracker.export_snapshot().unwrap();
//! tracker.import_snapshot(&snapshot).unwrap();
//! ```

pub mod config;
pub mod database;
pub mod business;
pub mod snapshot;
pub mod utils;
pub mod error;

// Re-export main types
pub use error::{TrackerError, ErrorKind, Result};
pub use config::TrackerConfig;
pub use database::models::{Category, Task, TaskWithCategory, StoreStats};
pub use business::Tracker;
#[cfg(feature = "diagnostics")]
pub use business::diagnostics::{Diagnostics, QueryResult, RawQueryReport};
pub use snapshot::Snapshot;

/// Color given to categories created without one
pub const DEFAULT_CATEGORY_COLOR: &str = "#4CAF50";

/// Category name shown for tasks without a category
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Category color shown for tasks without a category
pub const UNCATEGORIZED_COLOR: &str = "#cccccc";

/// Default filename offered for exported snapshots
pub const SNAPSHOT_FILENAME: &str = "tasktracker.db";
