//! Error types for the superrational crate

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the superrational crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("unknown game key '{key}' (no classification rule registered)")]
    UnknownGameKey { key: String },

    #[error("ambiguous {axis} catalog: text for '{first}' is a substring of text for '{second}'")]
    AmbiguousCatalog {
        axis: String,
        first: String,
        second: String,
    },

    #[error("failed to parse log file '{path}': {source}")]
    LogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
