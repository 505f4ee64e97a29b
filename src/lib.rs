//! # docchunk
//!
//! Batch ingestion of PDF, DOCX and plain-text documents into overlapping,
//! fixed-size text chunks serialized as JSON for downstream embedding.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docchunk::{Config, Pipeline};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads data/raw/, writes data/processed/chunks_<timestamp>.json
//!     let pipeline = Pipeline::new(Config::default())?;
//!     let report = pipeline.run()?;
//!
//!     println!(
//!         "Wrote {} chunks to {}",
//!         report.stats.total_chunks,
//!         report.output_file.display()
//!     );
//!     Ok(())
//! }
//! ```

// Core modules
pub mod api;
pub mod config;
pub mod error;
pub mod loader;
pub mod parser;
pub mod storage;
pub mod text;
pub mod utils;

// Re-export main API types
pub use api::{ChunkBatch, Pipeline, PipelineReport, SkippedFile};
pub use config::{ChunkingConfig, Config, PathsConfig};
pub use error::{IngestError, Result};

// Re-export commonly used types
pub use loader::{DocumentLoader, FileInfo};
pub use parser::{DocumentType, Page, ParsedDocument, parse_document};
pub use storage::OutputSummary;
pub use text::{Chunk, ChunkingStats, TextChunker};
