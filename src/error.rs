use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiActError {
    #[error("Parse error: failed to parse source file: {0}")]
    ParseError(String),

    #[error("Repository path does not exist: {0}")]
    RootNotFound(PathBuf),

    #[error("Invalid command line arguments: {0}")]
    InvalidArguments(String),

    #[error("No libraries entered")]
    NoInput,

    #[error("Risk catalog unavailable: {0}")]
    CatalogError(String),

    #[error("Draft generation failed: {0}")]
    DraftError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
