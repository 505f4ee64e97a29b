//! docchunk CLI application
//!
//! Command-line interface for the docchunk library.

use anyhow::Context;
use clap::{Parser, Subcommand};
use docchunk::config::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use docchunk::storage::{latest_output, load_chunks};
use docchunk::utils::format_file_size;
use docchunk::{ChunkingConfig, Config, FileInfo, OutputSummary, PathsConfig, Pipeline};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "docchunk")]
#[command(about = "Split PDF, DOCX and text documents into overlapping chunks for embedding")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chunk every document in the input directory into one JSON file
    Run {
        /// Directory containing .pdf, .docx and .txt files
        #[arg(short, long, default_value = DEFAULT_INPUT_DIR)]
        input: PathBuf,

        /// Directory receiving chunks_<timestamp>.json
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        /// Chunk size in characters
        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,

        /// Overlap between chunks in characters
        #[arg(long, default_value_t = DEFAULT_CHUNK_OVERLAP)]
        chunk_overlap: usize,
    },

    /// Summarise the most recent chunk file
    Verify {
        /// Directory holding chunks_<timestamp>.json files
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize logging; warnings only by default so the progress bar stays readable
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            input,
            output,
            chunk_size,
            chunk_overlap,
        } => {
            let config = Config {
                chunking: ChunkingConfig {
                    chunk_size,
                    chunk_overlap,
                },
                paths: PathsConfig {
                    input_dir: input,
                    output_dir: output,
                },
            };
            run_command(config)?;
        }
        Commands::Verify { output } => {
            verify_command(output)?;
        }
    }

    Ok(())
}

fn run_command(config: Config) -> anyhow::Result<()> {
    println!("🚀 Starting document ingestion pipeline...");
    println!("   📂 Input: {}", config.paths.input_dir.display());
    println!(
        "   ✂️  Chunking: {} chars, {} overlap",
        config.chunking.chunk_size, config.chunking.chunk_overlap
    );

    let pipeline = Pipeline::new(config).context("invalid pipeline configuration")?;

    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );

    let report = pipeline.run_with_progress(|index, total, path| {
        progress.set_length(total as u64);
        progress.set_position(index as u64);
        progress.set_message(progress_label(path));
    });
    progress.finish_and_clear();
    let report = report.context("pipeline run failed")?;

    for skipped in &report.skipped {
        eprintln!("⚠️  Skipped {}: {}", skipped.path.display(), skipped.reason);
    }

    println!("✅ Pipeline complete!");
    println!("   📄 Files processed: {}", report.files_processed);
    println!("   📊 Chunks: {}", report.stats.total_chunks);
    if report.stats.total_chunks > 0 {
        println!(
            "   📏 Chunk size: avg {:.0}, min {}, max {}",
            report.stats.avg_chunk_size, report.stats.min_chunk_size, report.stats.max_chunk_size
        );
    }
    println!("   ⏱️  Time: {:.2}s", report.elapsed_secs);
    println!("   💾 Output: {}", report.output_file.display());

    Ok(())
}

/// `name (size)` for the file being processed
fn progress_label(path: &Path) -> String {
    match FileInfo::from_path(path) {
        Ok(info) => format!("{} ({})", info.name, format_file_size(info.size_bytes)),
        Err(_) => path.display().to_string(),
    }
}

fn verify_command(output: PathBuf) -> anyhow::Result<()> {
    let latest = latest_output(&output)
        .with_context(|| format!("no chunk files found in {}", output.display()))?;
    let size = std::fs::metadata(&latest)?.len();
    let chunks = load_chunks(&latest)
        .with_context(|| format!("failed to load {}", latest.display()))?;

    println!("🔍 Output file: {}", latest.display());
    println!("   File size: {}", format_file_size(size));

    let summary = OutputSummary::from_chunks(&chunks);
    println!("   📊 Total chunks: {}", summary.total_chunks);

    println!();
    println!("📄 Chunks per document:");
    for (i, (source, count)) in summary.per_source.iter().enumerate() {
        println!("  {}. {}: {} chunk(s)", i + 1, source, count);
    }

    println!();
    println!("  {:<6} {:<40} {:<8} Preview", "#", "Source", "Chars");
    for chunk in &chunks {
        let preview: String = chunk
            .text
            .chars()
            .take(30)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        println!(
            "  {:<6} {:<40} {:<8} {}...",
            chunk.chunk_id, chunk.source_file, chunk.char_count, preview
        );
    }

    Ok(())
}
