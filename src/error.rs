use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Failed to write report: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Layout of {record} is inconsistent: {reason}")]
    Inconsistent { record: String, reason: String },
}

impl LayoutError {
    pub fn config_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }

    pub fn inconsistent(record: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Inconsistent {
            record: record.into(),
            reason: reason.into(),
        }
    }
}
