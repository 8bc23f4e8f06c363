//! Business logic layer for the task tracker
//!
//! This module provides the high-level Tracker API for managing
//! tasks and categories on top of the database layer.

pub mod tracker;
pub mod tasks;
pub mod categories;
#[cfg(feature = "diagnostics")]
pub mod diagnostics;

pub use tracker::Tracker;
