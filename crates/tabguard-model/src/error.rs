//! Error types for rule set and scalar type parsing.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read rules file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid rule set: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown scalar type: {0}")]
    UnknownScalarType(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
