//! API layer for docchunk
//!
//! This module provides the main public entry point for running the
//! ingestion pipeline over a directory of documents.

pub mod pipeline;

// Re-export main API types
pub use pipeline::{ChunkBatch, Pipeline, PipelineReport, SkippedFile};
