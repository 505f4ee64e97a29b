//! Document text extraction
//!
//! Each supported format has an [`Extractor`]; [`parse_document`] picks one by
//! file extension and wraps the extracted pages in a [`ParsedDocument`].

mod docx;
mod pdf;
mod plain;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use plain::TextExtractor;

use crate::error::{IngestError, Result};
use crate::utils::get_file_extension;
use std::path::{Path, PathBuf};

/// Core trait that all format extractors implement
pub trait Extractor {
    /// Extract the text of the file at `path`.
    ///
    /// Paginated formats return one [`Page`] per non-empty page with a 1-based
    /// number; other formats return a single page without a number.
    fn extract(&self, path: &Path) -> Result<ExtractedText>;
}

/// Output of an [`Extractor`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub pages: Vec<Page>,
    /// Page count of the source, including pages without text
    pub total_pages: u32,
}

impl ExtractedText {
    /// A single unnumbered page holding the whole document
    pub fn single(text: impl Into<String>) -> Self {
        Self {
            pages: vec![Page::unnumbered(text)],
            total_pages: 1,
        }
    }
}

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentType {
    Pdf,
    Docx,
    Txt,
}

impl DocumentType {
    pub const ALL: [DocumentType; 3] = [DocumentType::Pdf, DocumentType::Docx, DocumentType::Txt];

    /// Map a lowercase extension (without the dot) to a document type
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "pdf" => Some(DocumentType::Pdf),
            "docx" => Some(DocumentType::Docx),
            "txt" => Some(DocumentType::Txt),
            _ => None,
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        get_file_extension(path).and_then(|ext| Self::from_extension(&ext))
    }

    pub fn extension(&self) -> &'static str {
        match self {
            DocumentType::Pdf => "pdf",
            DocumentType::Docx => "docx",
            DocumentType::Txt => "txt",
        }
    }

    /// Whether extracted pages carry page numbers
    pub fn is_paginated(&self) -> bool {
        matches!(self, DocumentType::Pdf)
    }

    pub fn extractor(&self) -> &'static dyn Extractor {
        match self {
            DocumentType::Pdf => &PdfExtractor,
            DocumentType::Docx => &DocxExtractor,
            DocumentType::Txt => &TextExtractor,
        }
    }
}

/// Text of one page, or of a whole unpaginated document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// 1-based page number; `None` for unpaginated formats
    pub page_number: Option<u32>,
    pub text: String,
}

impl Page {
    pub fn numbered(page_number: u32, text: impl Into<String>) -> Self {
        Self {
            page_number: Some(page_number),
            text: text.into(),
        }
    }

    pub fn unnumbered(text: impl Into<String>) -> Self {
        Self {
            page_number: None,
            text: text.into(),
        }
    }
}

/// A document after text extraction
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    pub path: PathBuf,
    pub file_type: DocumentType,
    /// Page count of the source; 1 for unpaginated formats
    pub total_pages: u32,
    pub pages: Vec<Page>,
}

impl ParsedDocument {
    /// Path string recorded on every chunk of this document
    pub fn source_file(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    /// Total characters across all pages
    pub fn char_count(&self) -> usize {
        self.pages.iter().map(|p| p.text.chars().count()).sum()
    }
}

/// Parse any supported document, routing to the extractor for its extension
pub fn parse_document<P: AsRef<Path>>(path: P) -> Result<ParsedDocument> {
    let path = path.as_ref();
    let file_type = DocumentType::from_path(path).ok_or_else(|| {
        IngestError::UnsupportedFormat(
            get_file_extension(path).unwrap_or_else(|| path.display().to_string()),
        )
    })?;

    let ExtractedText { pages, total_pages } = file_type.extractor().extract(path)?;

    log::debug!(
        "Extracted {} page(s) from {} ({:?})",
        pages.len(),
        path.display(),
        file_type
    );

    Ok(ParsedDocument {
        path: path.to_path_buf(),
        file_type,
        total_pages,
        pages,
    })
}
