//! Utility functions for docchunk
//!
//! This module provides common utility functions used throughout the project.

use crate::error::Result;
use chrono::{DateTime, Local};
use std::path::Path;

/// Extensions accepted by the loader, lowercase and without the dot
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "docx", "txt"];

/// Get file extension from path
pub fn get_file_extension<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Check if a file is a supported document format
pub fn is_supported_document<P: AsRef<Path>>(path: P) -> bool {
    match get_file_extension(path) {
        Some(ext) => SUPPORTED_EXTENSIONS.contains(&ext.as_str()),
        None => false,
    }
}

/// Format file size in human readable format
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

/// Create directory if it doesn't exist
pub fn ensure_directory<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }

    Ok(())
}

/// Timestamp string for output file naming, e.g. `20240131_174502`
pub fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format("%Y%m%d_%H%M%S").to_string()
}

/// Get timestamp string for file naming
pub fn get_timestamp() -> String {
    format_timestamp(&Local::now())
}

/// Name of the output file for a run started at `timestamp`
pub fn chunks_file_name(timestamp: &str) -> String {
    format!("chunks_{}.json", timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_file_extension() {
        assert_eq!(get_file_extension("test.pdf"), Some("pdf".to_string()));
        assert_eq!(get_file_extension("test.PDF"), Some("pdf".to_string()));
        assert_eq!(get_file_extension("test"), None);
        assert_eq!(get_file_extension("test.tar.gz"), Some("gz".to_string()));
    }

    #[test]
    fn test_supported_document() {
        assert!(is_supported_document("document.pdf"));
        assert!(is_supported_document("memo.DOCX"));
        assert!(is_supported_document("notes.txt"));
        assert!(!is_supported_document("README.md"));
        assert!(!is_supported_document("image.jpg"));
        assert!(!is_supported_document("Makefile"));
    }

    #[test]
    fn test_file_size_formatting() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1048576), "1.0 MB");
    }

    #[test]
    fn test_ensure_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("data").join("processed");
        ensure_directory(&nested).unwrap();
        assert!(nested.is_dir());
        // second call is a no-op
        ensure_directory(&nested).unwrap();
    }

    #[test]
    fn test_timestamp() {
        let time = Local.with_ymd_and_hms(2024, 1, 31, 17, 45, 2).unwrap();
        assert_eq!(format_timestamp(&time), "20240131_174502");
        assert_eq!(chunks_file_name("20240131_174502"), "chunks_20240131_174502.json");
        assert_eq!(get_timestamp().len(), 15);
    }
}
