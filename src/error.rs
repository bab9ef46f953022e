use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HvtError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Corrupt cache file '{}': {reason}", path.display())]
    CorruptCache { path: PathBuf, reason: String },
}

pub type HvtResult<T> = Result<T, HvtError>;
