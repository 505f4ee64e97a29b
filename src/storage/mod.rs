//! Output storage for docchunk
//!
//! This module writes chunk files to disk and reads them back for inspection.

pub mod json;

// Re-export main types
pub use json::{OutputSummary, latest_output, load_chunks, write_chunks};
