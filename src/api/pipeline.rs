//! Pipeline - Main ingestion API
//!
//! Wires discovery, extraction, chunking and output together:
//! load file list → parse each file → chunk each page → write one JSON array.

use crate::config::Config;
use crate::error::Result;
use crate::loader::DocumentLoader;
use crate::parser::parse_document;
use crate::storage::write_chunks;
use crate::text::{Chunk, ChunkingStats, TextChunker};
use crate::utils::get_timestamp;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// A document left out of the output, with the reason it failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Chunks gathered from one pass over the input directory
#[derive(Debug, Clone, Default)]
pub struct ChunkBatch {
    /// All chunks, numbered 0.. in processing order
    pub chunks: Vec<Chunk>,
    pub files_processed: usize,
    pub skipped: Vec<SkippedFile>,
}

/// Summary of a completed pipeline run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub output_file: PathBuf,
    pub files_processed: usize,
    pub skipped: Vec<SkippedFile>,
    pub stats: ChunkingStats,
    /// Total processing time in seconds
    pub elapsed_secs: f64,
}

/// Sequential document ingestion pipeline
pub struct Pipeline {
    config: Config,
    loader: DocumentLoader,
    chunker: TextChunker,
}

impl Pipeline {
    /// Create a pipeline, rejecting an invalid chunking configuration up front
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let loader = DocumentLoader::new(config.paths.input_dir.clone());
        let chunker = TextChunker::new(config.chunking.clone())?;

        Ok(Self {
            config,
            loader,
            chunker,
        })
    }

    /// Create a pipeline with default configuration
    pub fn with_default_config() -> Result<Self> {
        Self::new(Config::default())
    }

    /// Get configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Extract and chunk one document; chunk IDs start at 0
    pub fn process_document<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Chunk>> {
        let document = parse_document(path)?;
        log::debug!(
            "{}: {} of {} page(s) with text, {} chars",
            document.source_file(),
            document.pages.len(),
            document.total_pages,
            document.char_count()
        );
        Ok(self.chunker.chunk_document(&document))
    }

    /// Chunk every document in the input directory without writing anything
    pub fn collect_chunks(&self) -> Result<ChunkBatch> {
        self.collect_chunks_with_progress(|_, _, _| {})
    }

    /// Like [`Pipeline::collect_chunks`], calling `progress_callback(index, total, path)`
    /// before each document
    pub fn collect_chunks_with_progress<F>(&self, mut progress_callback: F) -> Result<ChunkBatch>
    where
        F: FnMut(usize, usize, &Path),
    {
        let documents = self.loader.documents()?;
        let total = documents.len();
        let mut batch = ChunkBatch::default();

        for (index, path) in documents.iter().enumerate() {
            progress_callback(index, total, path.as_path());
            log::info!("Processing: {}", path.display());

            match self.process_document(path) {
                Ok(mut chunks) => {
                    let start_id = batch.chunks.len();
                    for (i, chunk) in chunks.iter_mut().enumerate() {
                        chunk.chunk_id = start_id + i;
                    }

                    log::info!("Generated {} chunks from {}", chunks.len(), path.display());
                    batch.chunks.extend(chunks);
                    batch.files_processed += 1;
                }
                Err(e) if e.is_recoverable() => {
                    log::warn!("Skipping {}: {}", path.display(), e);
                    batch.skipped.push(SkippedFile {
                        path: path.clone(),
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        Ok(batch)
    }

    /// Run the whole pipeline and write `chunks_<timestamp>.json`
    pub fn run(&self) -> Result<PipelineReport> {
        self.run_with_progress(|_, _, _| {})
    }

    /// Run the pipeline with a per-document progress callback
    pub fn run_with_progress<F>(&self, progress_callback: F) -> Result<PipelineReport>
    where
        F: FnMut(usize, usize, &Path),
    {
        let start_time = Instant::now();
        let timestamp = get_timestamp();

        let batch = self.collect_chunks_with_progress(progress_callback)?;
        let stats = ChunkingStats::from_chunks(&batch.chunks);
        let output_file = write_chunks(&batch.chunks, &self.config.paths.output_dir, &timestamp)?;

        let elapsed_secs = start_time.elapsed().as_secs_f64();
        log::info!(
            "Pipeline completed: {} files → {} chunks ({} skipped) in {:.2}s",
            batch.files_processed,
            stats.total_chunks,
            batch.skipped.len(),
            elapsed_secs
        );

        Ok(PipelineReport {
            output_file,
            files_processed: batch.files_processed,
            skipped: batch.skipped,
            stats,
            elapsed_secs,
        })
    }
}
