//! Database schema definitions

/// SQL to create the categories table
pub const CREATE_CATEGORIES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    name    TEXT NOT NULL,
    color   TEXT DEFAULT '#4CAF50'
)
"#;

/// SQL to create the tasks table
pub const CREATE_TASKS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    description TEXT,
    completed   INTEGER DEFAULT 0,
    category_id INTEGER,
    FOREIGN KEY (category_id) REFERENCES categories(id)
)
"#;

/// All table creation statements in order (categories must precede tasks)
pub const CREATE_ALL_TABLES: &[&str] = &[
    CREATE_CATEGORIES_TABLE,
    CREATE_TASKS_TABLE,
];

/// Connection-level pragmas applied to every store connection
pub const CONNECTION_PRAGMAS: &str = "PRAGMA foreign_keys = ON;";
