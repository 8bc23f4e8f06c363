//! Snapshot restoration
//!
//! Stages the snapshot in a temporary file and copies it page by page
//! into a fresh in-memory connection.

use std::fs;
use std::time::Duration;
use rusqlite::backup::Backup;
use rusqlite::{Connection, OpenFlags};
use tempfile::TempDir;
use crate::database::Database;
use crate::error::{Result, TrackerError};
use super::Snapshot;

/// Pages copied per backup step
const PAGES_PER_STEP: i32 = 256;

/// Load a snapshot into a new in-memory database
pub fn restore_snapshot(snapshot: &Snapshot) -> Result<Database> {
    let temp_dir = TempDir::new()
        .map_err(|e| TrackerError::SnapshotError(format!("Failed to create temp dir: {}", e)))?;
    let path = temp_dir.path().join("import.db");
    fs::write(&path, snapshot.as_bytes())
        .map_err(|e| TrackerError::SnapshotError(format!("Failed to stage snapshot: {}", e)))?;

    let source = Connection::open_with_flags(&path, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .map_err(|e| TrackerError::SnapshotError(format!("Failed to open snapshot: {}", e)))?;

    let mut target = Connection::open_in_memory()?;
    {
        let backup = Backup::new(&source, &mut target)?;
        backup
            .run_to_completion(PAGES_PER_STEP, Duration::ZERO, None)
            .map_err(|e| TrackerError::SnapshotError(format!("Failed to load snapshot: {}", e)))?;
    }

    let check: String = target
        .query_row("PRAGMA quick_check", [], |row| row.get(0))
        .map_err(|e| TrackerError::SnapshotError(format!("Snapshot is corrupt: {}", e)))?;
    if check != "ok" {
        return Err(TrackerError::SnapshotError(format!("Snapshot is corrupt: {}", check)));
    }

    Database::from_connection(target)
}
