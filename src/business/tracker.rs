//! Main Tracker API
//!
//! This module provides the store object that owns the in-memory
//! database. Callers create it, initialize it once, and pass it to
//! whatever renders its results.

use tracing::{error, info};
use crate::config::TrackerConfig;
use crate::error::{Result, TrackerError};
use crate::database::{Database, StoreStats, queries, seed};

/// Task tracker store
pub struct Tracker {
    /// Owned in-memory database
    pub(crate) db: Database,
    /// Options supplied at construction
    pub(crate) config: TrackerConfig,
    /// Set once `initialize` has created the schema
    pub(crate) initialized: bool,
}

impl Tracker {
    /// Load the embedded engine with an empty in-memory store
    ///
    /// The store is unusable until [`initialize`](Self::initialize) runs.
    pub fn new(config: TrackerConfig) -> Result<Self> {
        config.validate()?;
        let db = Database::open_in_memory().inspect_err(|e| {
            error!(error = %e, "failed to load database engine");
        })?;

        Ok(Self {
            db,
            config,
            initialized: false,
        })
    }

    /// Create and initialize a store in one step
    pub fn open(config: TrackerConfig) -> Result<Self> {
        let mut tracker = Self::new(config)?;
        tracker.initialize()?;
        Ok(tracker)
    }

    /// Create missing tables and seed empty ones
    ///
    /// Safe to call repeatedly; seeding only touches empty tables.
    pub fn initialize(&mut self) -> Result<()> {
        let result = (|| -> Result<()> {
            self.db.create_tables()?;
            if self.config.seed_defaults {
                seed::seed_defaults(self.db.connection())?;
            }
            Ok(())
        })();

        match result {
            Ok(()) => {
                if !self.initialized {
                    info!(seed = self.config.seed_defaults, "task store initialized");
                }
                self.initialized = true;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "failed to initialize task store");
                Err(TrackerError::Initialization(e.to_string()))
            }
        }
    }

    /// Check whether `initialize` has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Get the active configuration
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Get row counts
    pub fn stats(&self) -> Result<StoreStats> {
        self.ensure_initialized()?;
        queries::get_stats(self.db.connection())
    }

    /// Ensure the store is initialized
    pub(crate) fn ensure_initialized(&self) -> Result<()> {
        if !self.initialized {
            return Err(TrackerError::NotInitialized);
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub fn create_test_tracker() -> Tracker {
        Tracker::open(TrackerConfig::default()).unwrap()
    }

    pub fn create_empty_tracker() -> Tracker {
        Tracker::open(TrackerConfig::default().with_seed_defaults(false)).unwrap()
    }

    #[test]
    fn test_new_requires_initialize() {
        let tracker = Tracker::new(TrackerConfig::default()).unwrap();
        assert!(!tracker.is_initialized());
        assert!(matches!(tracker.stats(), Err(TrackerError::NotInitialized)));
        assert!(matches!(tracker.list_tasks(), Err(TrackerError::NotInitialized)));
    }

    #[test]
    fn test_initialize_seeds_defaults() {
        let tracker = create_test_tracker();
        let stats = tracker.stats().unwrap();
        assert_eq!(stats.total_categories, 4);
        assert_eq!(stats.total_tasks, 2);
        assert_eq!(stats.completed_tasks, 0);
    }

    #[test]
    fn test_initialize_idempotent() {
        let mut tracker = create_test_tracker();
        tracker.initialize().unwrap();
        tracker.initialize().unwrap();

        let stats = tracker.stats().unwrap();
        assert_eq!(stats.total_categories, 4);
        assert_eq!(stats.total_tasks, 2);
    }

    #[test]
    fn test_initialize_reseeds_emptied_table() {
        let mut tracker = create_test_tracker();
        for task in tracker.list_tasks().unwrap() {
            tracker.delete_task(task.id).unwrap();
        }
        assert_eq!(tracker.stats().unwrap().total_tasks, 0);

        tracker.initialize().unwrap();
        assert_eq!(tracker.stats().unwrap().total_tasks, 2);
        assert_eq!(tracker.stats().unwrap().total_categories, 4);
    }

    #[test]
    fn test_without_seeding() {
        let tracker = create_empty_tracker();
        assert_eq!(tracker.stats().unwrap(), StoreStats::default());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = TrackerConfig {
            uncategorized_color: "nope".to_string(),
            ..TrackerConfig::default()
        };
        assert!(matches!(Tracker::new(config), Err(TrackerError::ConfigError(_))));
    }
}
