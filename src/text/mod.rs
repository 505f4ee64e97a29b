//! Text chunking functionality for docchunk
//!
//! This module turns extracted document text into overlapping chunks and
//! reports size statistics over them.

pub mod chunking;

// Re-export main types and functions
pub use chunking::{Chunk, ChunkingStats, TextChunker};
