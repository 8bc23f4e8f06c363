//! Error types for the task tracker

use thiserror::Error;

/// Main error type for tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// A required field was empty or malformed
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Task references a category that does not exist
    #[error("Category not found: {0}")]
    CategoryNotFound(i64),

    /// Store used before `initialize`
    #[error("Store is not initialized")]
    NotInitialized,

    /// The embedded engine could not be loaded
    #[error("Initialization failed: {0}")]
    Initialization(String),

    /// Database operation failed
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Snapshot export or import failed
    #[error("Snapshot error: {0}")]
    SnapshotError(String),

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Coarse classification of a [`TrackerError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected before reaching storage
    Validation,
    /// Engine, snapshot or IO failure; the store stays usable
    Storage,
    /// Fatal for the whole session
    Initialization,
    /// Bad configuration input
    Configuration,
}

impl TrackerError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TrackerError::Validation(_) | TrackerError::CategoryNotFound(_) => ErrorKind::Validation,
            TrackerError::Initialization(_) => ErrorKind::Initialization,
            TrackerError::ConfigError(_) => ErrorKind::Configuration,
            TrackerError::NotInitialized
            | TrackerError::DatabaseError(_)
            | TrackerError::SnapshotError(_)
            | TrackerError::IoError(_) => ErrorKind::Storage,
        }
    }
}

impl From<rusqlite::Error> for TrackerError {
    fn from(err: rusqlite::Error) -> Self {
        TrackerError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::ConfigError(err.to_string())
    }
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;
