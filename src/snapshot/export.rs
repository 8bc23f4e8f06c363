//! Snapshot creation
//!
//! Writes a compacted copy of the in-memory store to a private
//! temporary file and reads it back as bytes.

use std::fs;
use tempfile::TempDir;
use crate::database::Database;
use crate::error::{Result, TrackerError};
use super::Snapshot;

/// Serialize the whole database
pub fn export_snapshot(db: &Database) -> Result<Snapshot> {
    let temp_dir = TempDir::new()
        .map_err(|e| TrackerError::SnapshotError(format!("Failed to create temp dir: {}", e)))?;
    let path = temp_dir.path().join("export.db");
    let path_str = path.to_str()
        .ok_or_else(|| TrackerError::SnapshotError("Temp path is not valid UTF-8".to_string()))?;

    db.connection().execute("VACUUM INTO ?1", [path_str])?;

    let bytes = fs::read(&path)
        .map_err(|e| TrackerError::SnapshotError(format!("Failed to read snapshot: {}", e)))?;

    Snapshot::from_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::queries;
    use crate::snapshot::SQLITE_HEADER;

    #[test]
    fn test_export_has_sqlite_header() {
        let db = Database::open_in_memory().unwrap();
        db.create_tables().unwrap();
        queries::create_category(db.connection(), "Work", "#e74c3c").unwrap();

        let snapshot = export_snapshot(&db).unwrap();
        assert!(snapshot.as_bytes().starts_with(SQLITE_HEADER));
    }

    #[test]
    fn test_export_readable_by_sqlite() {
        let db = Database::open_in_memory().unwrap();
        db.create_tables().unwrap();
        queries::create_task(db.connection(), "Exported", None, None).unwrap();

        let snapshot = export_snapshot(&db).unwrap();

        let temp_dir = TempDir::new().unwrap();
        let path = snapshot.write_to_dir(temp_dir.path(), "check.db").unwrap();
        let conn = rusqlite::Connection::open(&path).unwrap();
        let title: String = conn
            .query_row("SELECT title FROM tasks", [], |row| row.get(0))
            .unwrap();
        assert_eq!(title, "Exported");
    }
}
