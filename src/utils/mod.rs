//! Utility functions

pub mod validation;

pub use validation::{normalize_color, require_non_empty, validate_color};
