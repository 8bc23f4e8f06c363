//! Snapshot export and import
//!
//! A snapshot is the store serialized in SQLite's native file format.
//! Importing one replaces the whole in-memory store.

mod export;
mod import;

use std::fs;
use std::path::{Path, PathBuf};
use chrono::{DateTime, Utc};
use tracing::{info, warn};
use crate::business::Tracker;
use crate::database::queries;
use crate::error::{Result, TrackerError};

/// Header every SQLite database file starts with
pub const SQLITE_HEADER: &[u8; 16] = b"SQLite format 3\0";

/// Snapshot filename prefix for timestamped names
pub const SNAPSHOT_PREFIX: &str = "tasktracker";

/// Snapshot file extension
pub const SNAPSHOT_EXTENSION: &str = "db";

/// Date format used in timestamped snapshot names
pub const SNAPSHOT_DATE_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Serialized store contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    bytes: Vec<u8>,
}

impl Snapshot {
    /// Wrap raw bytes, checking the SQLite header
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if !bytes.starts_with(SQLITE_HEADER) {
            return Err(TrackerError::SnapshotError(
                "Not a SQLite database image".to_string(),
            ));
        }
        Ok(Self { bytes })
    }

    /// Read a snapshot file
    pub fn read_from(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .map_err(|e| TrackerError::SnapshotError(format!("Failed to read snapshot: {}", e)))?;
        Self::from_bytes(bytes)
    }

    /// Write the snapshot into `folder` under `filename`
    pub fn write_to_dir(&self, folder: &Path, filename: &str) -> Result<PathBuf> {
        fs::create_dir_all(folder)?;
        let path = folder.join(filename);
        fs::write(&path, &self.bytes)
            .map_err(|e| TrackerError::SnapshotError(format!("Failed to write snapshot: {}", e)))?;
        Ok(path)
    }

    /// Borrow the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take the raw bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Size in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false for a validated snapshot
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// File name carrying the given time, e.g. `tasktracker-20240101-120000.db`
    pub fn timestamped_filename(at: &DateTime<Utc>) -> String {
        format!(
            "{}-{}.{}",
            SNAPSHOT_PREFIX,
            at.format(SNAPSHOT_DATE_FORMAT),
            SNAPSHOT_EXTENSION
        )
    }
}

impl Tracker {
    /// Serialize the entire store
    pub fn export_snapshot(&self) -> Result<Snapshot> {
        self.ensure_initialized()?;
        let snapshot = export::export_snapshot(&self.db)?;
        info!(bytes = snapshot.len(), "exported snapshot");
        Ok(snapshot)
    }

    /// Export the store into `folder` under the configured filename
    pub fn export_snapshot_to_dir(&self, folder: &Path) -> Result<PathBuf> {
        let snapshot = self.export_snapshot()?;
        snapshot.write_to_dir(folder, &self.config.snapshot_filename)
    }

    /// Replace the store with the contents of `snapshot`
    ///
    /// The current store is left untouched if the snapshot cannot be
    /// loaded. Missing tables are created afterwards but never seeded, and
    /// task references to categories absent from the snapshot are cleared.
    pub fn import_snapshot(&mut self, snapshot: &Snapshot) -> Result<()> {
        let restored = import::restore_snapshot(snapshot)?;
        restored.create_tables()?;

        let cleared = queries::clear_dangling_category_refs(restored.connection())
            .map_err(|e| TrackerError::SnapshotError(format!("Failed to repair snapshot: {}", e)))?;
        if cleared > 0 {
            warn!(cleared, "snapshot had tasks referencing missing categories, uncategorized them");
        }

        self.db.replace(restored);
        self.initialized = true;

        info!(bytes = snapshot.len(), "imported snapshot");
        Ok(())
    }

    /// Import a snapshot file
    pub fn import_snapshot_file(&mut self, path: &Path) -> Result<()> {
        let snapshot = Snapshot::read_from(path)?;
        self.import_snapshot(&snapshot)
    }
}
