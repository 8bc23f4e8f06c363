//! Default rows written into an empty store

use rusqlite::Connection;
use tracing::info;
use crate::error::Result;
use super::queries;

/// Default categories as (name, color)
pub const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("Work", "#e74c3c"),
    ("Personal", "#3498db"),
    ("Shopping", "#f39c12"),
    ("Study", "#9b59b6"),
];

/// Default tasks as (title, description, category name)
pub const DEFAULT_TASKS: &[(&str, &str, &str)] = &[
    ("Finish the presentation", "AI presentation for programmers", "Work"),
    ("Buy groceries", "Milk, bread, fruit", "Shopping"),
];

/// What a seeding pass wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedOutcome {
    pub categories: usize,
    pub tasks: usize,
}

/// Seed each table only if it is empty
pub fn seed_defaults(conn: &Connection) -> Result<SeedOutcome> {
    let mut outcome = SeedOutcome::default();

    if queries::count_categories(conn)? == 0 {
        for &(name, color) in DEFAULT_CATEGORIES {
            queries::create_category(conn, name, color)?;
        }
        outcome.categories = DEFAULT_CATEGORIES.len();
    }

    if queries::count_tasks(conn)? == 0 {
        for &(title, description, category) in DEFAULT_TASKS {
            // Falls back to uncategorized when the user's categories differ
            let category_id = queries::find_category_id_by_name(conn, category)?;
            queries::create_task(conn, title, Some(description), category_id)?;
        }
        outcome.tasks = DEFAULT_TASKS.len();
    }

    if outcome != SeedOutcome::default() {
        info!(categories = outcome.categories, tasks = outcome.tasks, "seeded default rows");
    }

    Ok(outcome)
}
