//! Error types for SmartMed.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Reference table {file} could not be read: {source}")]
    Table {
        file: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Reference data directory not found: {0}")]
    DataDirMissing(PathBuf),

    #[error("Invalid patient profile: {0}")]
    InvalidProfile(String),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Process exit code for this error class
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidProfile(_) => 2,
            Error::Table { .. } | Error::DataDirMissing(_) => 3,
            Error::Config(_) | Error::Io(_) | Error::Json(_) => 1,
        }
    }

    /// True when the failure means the reference tables are unusable
    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, Error::Table { .. } | Error::DataDirMissing(_))
    }
}
