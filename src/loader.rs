//! Document discovery
//!
//! Lists the supported documents sitting in the input directory.

use crate::error::{IngestError, Result};
use crate::utils::{get_file_extension, is_supported_document};
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Scans an input directory for PDF, DOCX and TXT files
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    input_dir: PathBuf,
}

impl DocumentLoader {
    pub fn new<P: Into<PathBuf>>(input_dir: P) -> Self {
        Self {
            input_dir: input_dir.into(),
        }
    }

    /// Lazily list supported documents directly under the input directory.
    ///
    /// Each call re-reads the directory. Entries are yielded in file-name
    /// order; entries that cannot be read are logged and skipped.
    pub fn scan(&self) -> Result<impl Iterator<Item = PathBuf>> {
        if !self.input_dir.is_dir() {
            return Err(IngestError::NotFound(self.input_dir.clone()));
        }

        let paths = WalkDir::new(&self.input_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.into_path()),
                Err(e) => {
                    log::warn!("Skipping unreadable directory entry: {}", e);
                    None
                }
            })
            .filter(|path| path.is_file() && is_supported_document(path))
            .filter(|path| match File::open(path) {
                Ok(_) => true,
                Err(e) => {
                    log::warn!("Skipping unreadable file {}: {}", path.display(), e);
                    false
                }
            });

        Ok(paths)
    }

    /// Collect the current directory listing
    pub fn documents(&self) -> Result<Vec<PathBuf>> {
        let documents: Vec<PathBuf> = self.scan()?.collect();
        log::info!(
            "Found {} documents in {}",
            documents.len(),
            self.input_dir.display()
        );
        Ok(documents)
    }
}

/// Basic information about a document on disk
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    pub path: PathBuf,
    /// Lowercase extension without the dot, empty if none
    pub extension: String,
    pub size_bytes: u64,
}

impl FileInfo {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)?;

        Ok(Self {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path: path.to_path_buf(),
            extension: get_file_extension(path).unwrap_or_default(),
            size_bytes: metadata.len(),
        })
    }
}
