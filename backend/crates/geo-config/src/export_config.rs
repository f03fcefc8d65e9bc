use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_EXPORT_FILENAME: &str = "points.csv";

pub const MIN_EXPORT_MAX_POINTS: usize = 1;
pub const MAX_EXPORT_MAX_POINTS: usize = 100000;
pub const DEFAULT_EXPORT_MAX_POINTS: usize = 1000;

/// Settings for the stateless CSV export endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Attachment filename offered to the browser
    pub filename: String,
    /// Largest accepted `points` array
    pub max_points: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename: String::from(DEFAULT_EXPORT_FILENAME),
            max_points: DEFAULT_EXPORT_MAX_POINTS,
        }
    }
}

impl ExportConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.filename.ends_with(".csv") || self.filename.len() <= ".csv".len() {
            return Err(ConfigError::export(format!(
                "export.filename must be a non-empty name ending in .csv, got '{}'",
                self.filename
            )));
        }

        // Ends up inside a Content-Disposition header.
        if self
            .filename
            .chars()
            .any(|c| matches!(c, '/' | '\\' | '"') || c.is_control())
        {
            return Err(ConfigError::export(format!(
                "export.filename cannot contain path separators, quotes or control characters, got '{}'",
                self.filename
            )));
        }

        if self.max_points < MIN_EXPORT_MAX_POINTS || self.max_points > MAX_EXPORT_MAX_POINTS {
            return Err(ConfigError::export(format!(
                "export.max_points must be {}-{}, got {}",
                MIN_EXPORT_MAX_POINTS, MAX_EXPORT_MAX_POINTS, self.max_points
            )));
        }

        Ok(())
    }
}
