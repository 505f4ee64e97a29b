//! Error types for docchunk
//!
//! This module provides error handling for every pipeline stage: directory
//! discovery, text extraction, chunking configuration and output writing.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ingestion operations
#[derive(Error, Debug)]
pub enum IngestError {
    /// Input directory (or expected output file) does not exist
    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A document could not be read or its text could not be extracted
    #[error("Failed to parse {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    /// No extractor handles this file extension
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for ingestion operations
pub type Result<T> = std::result::Result<T, IngestError>;

impl IngestError {
    /// Build a parse error for `path`
    pub fn parse(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        IngestError::Parse {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether the orchestrator may skip the offending file and carry on
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            IngestError::Parse { .. } | IngestError::UnsupportedFormat(_)
        )
    }
}
