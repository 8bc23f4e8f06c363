//! Database connection management

use rusqlite::Connection;
use tracing::{debug, error};
use crate::error::{TrackerError, Result};
use super::schema;

/// In-memory database connection wrapper
pub struct Database {
    /// SQLite connection
    conn: Connection,
}

impl Database {
    /// Open an empty in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| TrackerError::Initialization(e.to_string()))?;
        Self::from_connection(conn)
    }

    /// Wrap an existing connection, applying store pragmas
    pub fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(schema::CONNECTION_PRAGMAS)?;
        Ok(Self { conn })
    }

    /// Create all tables that are missing
    pub fn create_tables(&self) -> Result<()> {
        for sql in schema::CREATE_ALL_TABLES {
            self.conn.execute(sql, [])?;
        }
        Ok(())
    }

    /// Check whether both store tables exist
    pub fn has_tables(&self) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('categories', 'tasks')",
            [],
            |row| row.get(0),
        )?;
        Ok(count == 2)
    }

    /// Get a reference to the connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Swap in a different connection, returning the previous one
    pub fn replace(&mut self, other: Database) -> Database {
        debug!("replacing store connection");
        std::mem::replace(self, other)
    }

    /// Begin a transaction
    pub fn begin_transaction(&self) -> Result<()> {
        self.conn.execute_batch("BEGIN TRANSACTION")?;
        Ok(())
    }

    /// Commit a transaction
    pub fn commit_transaction(&self) -> Result<()> {
        self.conn.execute_batch("COMMIT")?;
        Ok(())
    }

    /// Rollback a transaction
    pub fn rollback_transaction(&self) -> Result<()> {
        self.conn.execute_batch("ROLLBACK")?;
        Ok(())
    }

    /// Check whether a transaction is open
    pub fn in_transaction(&self) -> bool {
        !self.conn.is_autocommit()
    }

    /// Roll back any open transaction, logging instead of failing
    ///
    /// Returns true if a transaction was open.
    pub fn rollback_if_open(&self) -> bool {
        if !self.in_transaction() {
            return false;
        }
        if let Err(e) = self.rollback_transaction() {
            error!(error = %e, "rollback failed");
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_idempotent() {
        let db = Database::open_in_memory().unwrap();
        assert!(!db.has_tables().unwrap());

        db.create_tables().unwrap();
        db.create_tables().unwrap();
        assert!(db.has_tables().unwrap());
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let db = Database::open_in_memory().unwrap();
        let enabled: i64 = db.connection()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_rollback_discards_writes() {
        let db = Database::open_in_memory().unwrap();
        db.create_tables().unwrap();

        db.begin_transaction().unwrap();
        db.connection()
            .execute("INSERT INTO categories (name, color) VALUES ('Temp', '#000000')", [])
            .unwrap();
        db.rollback_transaction().unwrap();

        let count: i64 = db.connection()
            .query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_rollback_if_open() {
        let db = Database::open_in_memory().unwrap();
        db.create_tables().unwrap();
        assert!(!db.in_transaction());
        assert!(!db.rollback_if_open());

        db.begin_transaction().unwrap();
        db.connection()
            .execute("INSERT INTO categories (name, color) VALUES ('Temp', '#000000')", [])
            .unwrap();
        assert!(db.in_transaction());
        assert!(db.rollback_if_open());
        assert!(!db.in_transaction());

        let count: i64 = db.connection()
            .query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_replace_returns_previous() {
        let mut db = Database::open_in_memory().unwrap();
        db.create_tables().unwrap();

        let fresh = Database::open_in_memory().unwrap();
        let old = db.replace(fresh);

        assert!(old.has_tables().unwrap());
        assert!(!db.has_tables().unwrap());
    }
}
