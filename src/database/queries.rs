//! SQL query operations for database access
//!
//! This module provides low-level query functions for database operations.
//! For validated operations, use the Tracker API.

use rusqlite::{Connection, OptionalExtension, Row, params};
use crate::error::Result;
use super::models::{Category, StoreStats, Task, TaskWithCategory};

// ============================================================================
// Category queries
// ============================================================================

/// Count categories
pub fn count_categories(conn: &Connection) -> Result<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;
    Ok(count)
}

/// Get all categories in storage order
pub fn get_all_categories(conn: &Connection) -> Result<Vec<Category>> {
    let mut stmt = conn.prepare("SELECT id, name, color FROM categories ORDER BY id")?;
    let categories = stmt.query_map([], category_from_row)?;
    categories.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
}

/// Get a single category
pub fn get_category(conn: &Connection, id: i64) -> Result<Option<Category>> {
    let category = conn
        .query_row(
            "SELECT id, name, color FROM categories WHERE id = ?",
            params![id],
            category_from_row,
        )
        .optional()?;
    Ok(category)
}

/// Find the first category with the given name
pub fn find_category_id_by_name(conn: &Connection, name: &str) -> Result<Option<i64>> {
    let id = conn
        .query_row(
            "SELECT id FROM categories WHERE name = ? ORDER BY id LIMIT 1",
            params![name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(id)
}

/// Check if a category exists
pub fn category_exists(conn: &Connection, id: i64) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM categories WHERE id = ?",
        params![id],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Insert a category, returning its id
pub fn create_category(conn: &Connection, name: &str, color: &str) -> Result<i64> {
    conn.execute(
        "INSERT INTO categories (name, color) VALUES (?, ?)",
        params![name, color],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Clear the category reference on every task that uses it
pub fn uncategorize_tasks(conn: &Connection, category_id: i64) -> Result<usize> {
    let rows = conn.execute(
        "UPDATE tasks SET category_id = NULL WHERE category_id = ?",
        params![category_id],
    )?;
    Ok(rows)
}

/// Clear task references to categories that do not exist
pub fn clear_dangling_category_refs(conn: &Connection) -> Result<usize> {
    let rows = conn.execute(
        "UPDATE tasks SET category_id = NULL
         WHERE category_id IS NOT NULL
           AND category_id NOT IN (SELECT id FROM categories)",
        [],
    )?;
    Ok(rows)
}

/// Delete a category row (callers must uncategorize tasks first)
pub fn delete_category_row(conn: &Connection, category_id: i64) -> Result<bool> {
    let rows = conn.execute("DELETE FROM categories WHERE id = ?", params![category_id])?;
    Ok(rows > 0)
}

fn category_from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        color: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
    })
}

// ============================================================================
// Task queries
// ============================================================================

/// Count tasks
pub fn count_tasks(conn: &Connection) -> Result<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))?;
    Ok(count)
}

/// Get all tasks joined with their category
///
/// `category_id` comes from the joined row, so it is `None` exactly when
/// the sentinel is used.
pub fn get_all_tasks_with_category(
    conn: &Connection,
    uncategorized_label: &str,
    uncategorized_color: &str,
) -> Result<Vec<TaskWithCategory>> {
    let mut stmt = conn.prepare(
        "SELECT t.id, t.title, t.description, t.completed, c.id AS category_id,
                COALESCE(c.name, ?1) AS category_name,
                COALESCE(c.color, ?2) AS category_color
         FROM tasks t
         LEFT JOIN categories c ON t.category_id = c.id
         ORDER BY t.id",
    )?;

    let tasks = stmt.query_map(params![uncategorized_label, uncategorized_color], |row| {
        Ok(TaskWithCategory {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            completed: row.get::<_, Option<i64>>(3)?.unwrap_or(0) != 0,
            category_id: row.get(4)?,
            category_name: row.get(5)?,
            category_color: row.get(6)?,
        })
    })?;

    tasks.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
}

/// Get a single task
pub fn get_task(conn: &Connection, id: i64) -> Result<Option<Task>> {
    let task = conn
        .query_row(
            "SELECT id, title, description, completed, category_id FROM tasks WHERE id = ?",
            params![id],
            |row| {
                Ok(Task {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    description: row.get(2)?,
                    completed: row.get::<_, Option<i64>>(3)?.unwrap_or(0) != 0,
                    category_id: row.get(4)?,
                })
            },
        )
        .optional()?;
    Ok(task)
}

/// Insert a task with completed = 0, returning its id
pub fn create_task(
    conn: &Connection,
    title: &str,
    description: Option<&str>,
    category_id: Option<i64>,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO tasks (title, description, completed, category_id) VALUES (?, ?, 0, ?)",
        params![title, description, category_id],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Set the completed flag
pub fn set_task_completed(conn: &Connection, id: i64, completed: bool) -> Result<bool> {
    let rows = conn.execute(
        "UPDATE tasks SET completed = ? WHERE id = ?",
        params![completed as i32, id],
    )?;
    Ok(rows > 0)
}

/// Delete a task
pub fn delete_task(conn: &Connection, id: i64) -> Result<bool> {
    let rows = conn.execute("DELETE FROM tasks WHERE id = ?", params![id])?;
    Ok(rows > 0)
}

// ============================================================================
// Statistics
// ============================================================================

/// Get row counts
pub fn get_stats(conn: &Connection) -> Result<StoreStats> {
    let total_tasks: u32 = conn.query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))?;
    let completed_tasks: u32 = conn.query_row(
        "SELECT COUNT(*) FROM tasks WHERE completed != 0",
        [],
        |row| row.get(0),
    )?;
    let total_categories: u32 =
        conn.query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;

    Ok(StoreStats {
        total_tasks,
        completed_tasks,
        total_categories,
    })
}
