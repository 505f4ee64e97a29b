//! PDF text extraction
//!
//! Pages are extracted with `pdf-extract`; documents it cannot handle fall back
//! to `lopdf`'s own per-page text extraction.

use super::{ExtractedText, Extractor, Page};
use crate::error::{IngestError, Result};
use lopdf::Document;
use std::path::Path;

/// Extracts one [`Page`] per non-empty PDF page
pub struct PdfExtractor;

impl Extractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<ExtractedText> {
        let data = std::fs::read(path).map_err(|e| IngestError::parse(path, e))?;

        // Loading through lopdf first rejects garbage and password-protected
        // files before pdf-extract gets a chance to panic on them.
        let document = Document::load_mem(&data)
            .map_err(|e| IngestError::parse(path, format!("failed to load PDF: {}", e)))?;
        if document.is_encrypted() {
            return Err(IngestError::parse(path, "PDF is password-protected"));
        }

        let total_pages = document.get_pages().len() as u32;
        if total_pages == 0 {
            return Err(IngestError::parse(path, "PDF has no pages"));
        }

        let raw_pages = match extract_with_pdf_extract(&data) {
            Ok(pages) => pages,
            Err(reason) => {
                log::warn!(
                    "pdf-extract failed on {}: {}, trying lopdf fallback",
                    path.display(),
                    reason
                );
                extract_with_lopdf(&document, path)?
            }
        };

        let pages = pages_with_text(raw_pages);
        if pages.is_empty() {
            log::warn!(
                "No extractable text in {} (image-only or empty PDF)",
                path.display()
            );
        }

        Ok(ExtractedText { pages, total_pages })
    }
}

fn extract_with_pdf_extract(data: &[u8]) -> std::result::Result<Vec<(u32, String)>, String> {
    // pdf-extract panics on some malformed font programs
    let outcome = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(data))
        .map_err(|_| "extractor panicked".to_string())?;

    let pages = outcome.map_err(|e| e.to_string())?;
    Ok(pages
        .into_iter()
        .enumerate()
        .map(|(i, text)| (i as u32 + 1, text))
        .collect())
}

fn extract_with_lopdf(document: &Document, path: &Path) -> Result<Vec<(u32, String)>> {
    let mut pages = Vec::new();

    for page_number in document.get_pages().keys() {
        match document.extract_text(&[*page_number]) {
            Ok(text) => pages.push((*page_number, text)),
            Err(e) => log::debug!(
                "Could not extract page {} of {}: {}",
                page_number,
                path.display(),
                e
            ),
        }
    }

    if pages.is_empty() {
        return Err(IngestError::parse(path, "no page text could be extracted"));
    }

    Ok(pages)
}

/// Clean raw `(page_number, text)` pairs and drop pages without visible text
fn pages_with_text(raw_pages: Vec<(u32, String)>) -> Vec<Page> {
    raw_pages
        .into_iter()
        .map(|(number, text)| (number, clean_page_text(&text)))
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(number, text)| Page::numbered(number, text))
        .collect()
}

/// Strip NUL bytes and normalise line endings left behind by PDF text operators
fn clean_page_text(text: &str) -> String {
    text.replace('\0', "").replace("\r\n", "\n")
}
