//! Common error types for EmoSet

use std::path::PathBuf;
use thiserror::Error;

/// Common result type for EmoSet operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the EmoSet pipeline
///
/// Per-line parse problems (malformed annotation lines, unrecognized emotion
/// codes) are never errors; they are excluded locally and surfaced through
/// the phase statistics counters.
#[derive(Error, Debug)]
pub enum Error {
    /// Required corpus directory or metadata file missing
    #[error("Not found: {0}")]
    NotFound(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Metadata table read/parse error (wraps csv::Error)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Label schema violation: unmapped rename code, missing or duplicate
    /// columns, strict-mode unrecognized rater vote
    #[error("Schema error: {0}")]
    Schema(String),

    /// Data integrity violation in row values
    #[error("Data error: {0}")]
    Data(String),

    /// Referenced audio file does not exist (strict missing-audio policy)
    #[error("Missing audio file: {0}")]
    MissingAudio(PathBuf),

    /// Invalid ingest options
    #[error("Configuration error: {0}")]
    Config(String),
}
