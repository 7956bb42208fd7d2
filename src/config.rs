use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::Level;

use crate::error::LayoutError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Plain,
    Json,
}

/// Settings for the detailed layout report. The two-number footprint line
/// takes no configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub format: ReportFormat,
    pub color: bool,
    pub log_level: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Plain,
            color: true,
            log_level: "warn".to_string(),
        }
    }
}

impl ReportConfig {
    pub fn from_toml(content: &str) -> Result<Self, LayoutError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, LayoutError> {
        let content = fs::read_to_string(path).map_err(|err| LayoutError::config_read(path, err))?;
        Self::from_toml(&content)
    }

    /// Unknown level names fall back to `WARN`.
    pub fn level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::WARN)
    }
}
