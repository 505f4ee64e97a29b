//! JSON chunk files
//!
//! Each pipeline run writes its chunks to one `chunks_<timestamp>.json` file
//! holding a single pretty-printed array.

use crate::error::{IngestError, Result};
use crate::text::Chunk;
use crate::utils::{chunks_file_name, ensure_directory};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

const FILE_PREFIX: &str = "chunks_";
const FILE_SUFFIX: &str = ".json";

/// Write `chunks` to `<output_dir>/chunks_<timestamp>.json`, creating the directory if needed.
///
/// Fails with an I/O error if a file for the same timestamp already exists.
pub fn write_chunks<P: AsRef<Path>>(chunks: &[Chunk], output_dir: P, timestamp: &str) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    ensure_directory(output_dir)?;

    let output_file = output_dir.join(chunks_file_name(timestamp));
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&output_file)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, chunks)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    log::info!("Saved {} chunks to {}", chunks.len(), output_file.display());
    Ok(output_file)
}

/// Load a chunk file written by [`write_chunks`]
pub fn load_chunks<P: AsRef<Path>>(path: P) -> Result<Vec<Chunk>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IngestError::NotFound(path.to_path_buf()));
    }

    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

fn is_chunks_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with(FILE_PREFIX) && n.ends_with(FILE_SUFFIX))
}

/// Most recently modified chunk file in `output_dir`
pub fn latest_output<P: AsRef<Path>>(output_dir: P) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if !output_dir.is_dir() {
        return Err(IngestError::NotFound(output_dir.to_path_buf()));
    }

    let mut candidates: Vec<(SystemTime, PathBuf)> = Vec::new();
    for entry in WalkDir::new(output_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() || !is_chunks_file(entry.path()) {
            continue;
        }
        let modified = entry.metadata().map_err(std::io::Error::from)?.modified()?;
        candidates.push((modified, entry.into_path()));
    }

    // Names embed the run timestamp, so they break mtime ties
    candidates
        .into_iter()
        .max()
        .map(|(_, path)| path)
        .ok_or_else(|| IngestError::NotFound(output_dir.join(format!("{}*{}", FILE_PREFIX, FILE_SUFFIX))))
}

/// Per-source breakdown of a chunk file
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct OutputSummary {
    pub total_chunks: usize,
    /// `(source_file, chunk count)` in first-seen order
    pub per_source: Vec<(String, usize)>,
}

impl OutputSummary {
    pub fn from_chunks(chunks: &[Chunk]) -> Self {
        let mut per_source: Vec<(String, usize)> = Vec::new();

        for chunk in chunks {
            match per_source.iter_mut().find(|(source, _)| *source == chunk.source_file) {
                Some((_, count)) => *count += 1,
                None => per_source.push((chunk.source_file.clone(), 1)),
            }
        }

        Self {
            total_chunks: chunks.len(),
            per_source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(id: usize, source: &str, text: &str) -> Chunk {
        Chunk {
            chunk_id: id,
            text: text.to_string(),
            char_count: text.chars().count(),
            source_file: source.to_string(),
            page_number: None,
        }
    }

    #[test]
    fn test_write_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let out = temp_dir.path().join("processed");
        let chunks = vec![chunk(0, "a.txt", "héllo"), chunk(1, "a.txt", "wörld")];

        let path = write_chunks(&chunks, &out, "20240101_000000").unwrap();
        assert_eq!(path, out.join("chunks_20240101_000000.json"));

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("héllo"), "non-ASCII text should not be escaped");
        assert!(raw.contains("\n  {"), "output should be indented by two spaces");

        assert_eq!(load_chunks(&path).unwrap(), chunks);
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_chunks(&[], temp_dir.path(), "20240101_000000").unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!([]));
    }

    #[test]
    fn test_latest_output() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path();

        assert!(matches!(latest_output(dir), Err(IngestError::NotFound(_))));

        write_chunks(&[], dir, "20240101_000000").unwrap();
        write_chunks(&[], dir, "20240102_000000").unwrap();
        std::fs::write(dir.join("notes.json"), "[]").unwrap();

        let latest = latest_output(dir).unwrap();
        assert_eq!(latest, dir.join("chunks_20240102_000000.json"));
    }

    #[test]
    fn test_latest_output_ignores_subdirectories() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path();

        write_chunks(&[], dir, "20240101_000000").unwrap();
        write_chunks(&[], dir.join("archive"), "20991231_235959").unwrap();
        std::fs::create_dir(dir.join("chunks_dir.json")).unwrap();

        let latest = latest_output(dir).unwrap();
        assert_eq!(latest, dir.join("chunks_20240101_000000.json"));
    }

    #[test]
    fn test_same_timestamp_does_not_overwrite() {
        let temp_dir = tempfile::tempdir().unwrap();
        let first = vec![chunk(0, "a.txt", "kept")];

        let path = write_chunks(&first, temp_dir.path(), "20240101_000000").unwrap();
        let err = write_chunks(&[], temp_dir.path(), "20240101_000000").unwrap_err();

        assert!(matches!(err, IngestError::Io(ref e) if e.kind() == std::io::ErrorKind::AlreadyExists));
        assert_eq!(load_chunks(&path).unwrap(), first);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = load_chunks(temp_dir.path().join("chunks_x.json")).unwrap_err();
        assert!(matches!(err, IngestError::NotFound(_)));
    }

    #[test]
    fn test_summary_groups_by_source() {
        let chunks = vec![
            chunk(0, "b.pdf", "x"),
            chunk(1, "b.pdf", "y"),
            chunk(2, "a.txt", "z"),
            chunk(3, "b.pdf", "w"),
        ];
        let summary = OutputSummary::from_chunks(&chunks);

        assert_eq!(summary.total_chunks, 4);
        assert_eq!(
            summary.per_source,
            vec![("b.pdf".to_string(), 3), ("a.txt".to_string(), 1)]
        );
    }
}
