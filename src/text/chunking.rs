//! Text chunking algorithms and utilities
//!
//! Splits extracted document text into fixed-size, overlapping character
//! windows ready to be handed to an embedding model.

use crate::config::ChunkingConfig;
use crate::error::Result;
use crate::parser::ParsedDocument;
use serde::{Deserialize, Serialize};

/// A chunk of document text, as written to the output JSON
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chunk {
    /// Sequential identifier, unique across one pipeline run
    pub chunk_id: usize,

    /// The actual text content
    pub text: String,

    /// Length of `text` in characters
    pub char_count: usize,

    /// Path of the originating document
    pub source_file: String,

    /// 1-based page number, only for paginated sources
    pub page_number: Option<u32>,
}

/// Character-window chunker with overlap
#[derive(Debug, Clone)]
pub struct TextChunker {
    config: ChunkingConfig,
}

impl TextChunker {
    /// Create a new text chunker with the given configuration
    pub fn new(config: ChunkingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a chunker with default configuration
    pub fn with_default_config() -> Result<Self> {
        Self::new(ChunkingConfig::default())
    }

    pub fn config(&self) -> &ChunkingConfig {
        &self.config
    }

    /// Chunk text into overlapping segments.
    ///
    /// IDs on the returned chunks start at 0; callers that merge chunks from
    /// several documents renumber them.
    pub fn chunk_text(
        &self,
        text: &str,
        source_file: &str,
        page_number: Option<u32>,
    ) -> Vec<Chunk> {
        // Byte offset of every char boundary, including the end of the text,
        // so windows can be sliced in characters without splitting code points.
        let boundaries: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let total_chars = boundaries.len() - 1;

        let mut chunks = Vec::new();
        if total_chars == 0 {
            return chunks;
        }

        let stride = self.config.stride();
        let mut start = 0;
        loop {
            let end = (start + self.config.chunk_size).min(total_chars);
            let chunk_text = &text[boundaries[start]..boundaries[end]];

            chunks.push(Chunk {
                chunk_id: chunks.len(),
                text: chunk_text.to_string(),
                char_count: end - start,
                source_file: source_file.to_string(),
                page_number,
            });

            if end == total_chars {
                break;
            }
            start += stride;
        }

        chunks
    }

    /// Chunk every page of a parsed document independently
    pub fn chunk_document(&self, document: &ParsedDocument) -> Vec<Chunk> {
        let source_file = document.source_file();
        let mut chunks = Vec::new();

        for page in &document.pages {
            let page_chunks = self.chunk_text(&page.text, &source_file, page.page_number);
            log::debug!(
                "{} page {:?}: {} chunks",
                source_file,
                page.page_number,
                page_chunks.len()
            );
            chunks.extend(page_chunks);
        }

        for (i, chunk) in chunks.iter_mut().enumerate() {
            chunk.chunk_id = i;
        }

        chunks
    }
}

/// Size statistics over a set of chunks
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ChunkingStats {
    pub total_chunks: usize,
    pub avg_chunk_size: f64,
    pub min_chunk_size: usize,
    pub max_chunk_size: usize,
}

impl ChunkingStats {
    pub fn from_chunks(chunks: &[Chunk]) -> Self {
        if chunks.is_empty() {
            return Self::default();
        }

        let total: usize = chunks.iter().map(|c| c.char_count).sum();
        Self {
            total_chunks: chunks.len(),
            avg_chunk_size: total as f64 / chunks.len() as f64,
            min_chunk_size: chunks.iter().map(|c| c.char_count).min().unwrap_or(0),
            max_chunk_size: chunks.iter().map(|c| c.char_count).max().unwrap_or(0),
        }
    }
}
