//! Input validation applied before anything reaches storage

use crate::error::{Result, TrackerError};

/// Reject empty or whitespace-only text, returning it trimmed
pub fn require_non_empty<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::Validation(format!("{} must not be empty", field)));
    }
    Ok(trimmed)
}

/// Accept `#rgb` or `#rrggbb`
pub fn validate_color(color: &str) -> Result<()> {
    let Some(hex) = color.strip_prefix('#') else {
        return Err(TrackerError::Validation(format!("Color must start with '#': {}", color)));
    };

    if !matches!(hex.len(), 3 | 6) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(TrackerError::Validation(format!("Invalid hex color: {}", color)));
    }

    Ok(())
}

/// Validate and trim a color, falling back to the default when blank
pub fn normalize_color(color: Option<&str>) -> Result<String> {
    let color = match color.map(str::trim) {
        Some(c) if !c.is_empty() => c,
        _ => crate::DEFAULT_CATEGORY_COLOR,
    };
    validate_color(color)?;
    Ok(color.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty() {
        assert_eq!(require_non_empty("title", "  Run 5k ").unwrap(), "Run 5k");
        assert!(require_non_empty("title", "").is_err());
        assert!(require_non_empty("title", " \t\n").is_err());

        let err = require_non_empty("Category name", "").unwrap_err();
        assert!(err.to_string().contains("Category name"));
    }

    #[test]
    fn test_validate_color() {
        assert!(validate_color("#00ff00").is_ok());
        assert!(validate_color("#4CAF50").is_ok());
        assert!(validate_color("#abc").is_ok());

        assert!(validate_color("00ff00").is_err());
        assert!(validate_color("#00ff0").is_err());
        assert!(validate_color("#gggggg").is_err());
        assert!(validate_color("#").is_err());
        assert!(validate_color("").is_err());
    }

    #[test]
    fn test_normalize_color() {
        assert_eq!(normalize_color(None).unwrap(), "#4CAF50");
        assert_eq!(normalize_color(Some("  ")).unwrap(), "#4CAF50");
        assert_eq!(normalize_color(Some(" #123456 ")).unwrap(), "#123456");
        assert!(normalize_color(Some("red")).is_err());
    }
}
