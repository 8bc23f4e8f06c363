//! Database layer for the task tracker
//!
//! Handles SQLite database operations including:
//! - Schema creation and default seeding
//! - CRUD operations for tasks and categories

pub mod models;
pub mod schema;
pub mod connection;
pub mod seed;
pub mod queries;

pub use connection::Database;
pub use models::*;
