//! Tracker configuration

use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::error::{Result, TrackerError};
use crate::utils::validate_color;
use crate::{SNAPSHOT_FILENAME, UNCATEGORIZED_COLOR, UNCATEGORIZED_LABEL};

/// Options for a [`Tracker`](crate::Tracker)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Seed default categories and tasks into empty tables on initialize
    pub seed_defaults: bool,
    /// Category name shown for tasks without a category
    pub uncategorized_label: String,
    /// Category color shown for tasks without a category
    pub uncategorized_color: String,
    /// File name used when writing a snapshot to a directory
    pub snapshot_filename: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            seed_defaults: true,
            uncategorized_label: UNCATEGORIZED_LABEL.to_string(),
            uncategorized_color: UNCATEGORIZED_COLOR.to_string(),
            snapshot_filename: SNAPSHOT_FILENAME.to_string(),
        }
    }
}

impl TrackerConfig {
    /// Parse from JSON; missing keys take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Builder-style toggle for default seeding
    pub fn with_seed_defaults(mut self, seed: bool) -> Self {
        self.seed_defaults = seed;
        self
    }

    /// Check field values
    pub fn validate(&self) -> Result<()> {
        validate_color(&self.uncategorized_color)
            .map_err(|e| TrackerError::ConfigError(e.to_string()))?;
        if self.snapshot_filename.trim().is_empty() {
            return Err(TrackerError::ConfigError("snapshot_filename must not be empty".to_string()));
        }
        Ok(())
    }
}
