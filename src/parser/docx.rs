//! DOCX text extraction
//!
//! A `.docx` file is a zip container; the body text lives in
//! `word/document.xml` as `w:p` paragraphs made of `w:t` runs.

use super::{ExtractedText, Extractor};
use crate::error::{IngestError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extracts the body paragraphs of a Word document as one unnumbered page
pub struct DocxExtractor;

impl Extractor for DocxExtractor {
    fn extract(&self, path: &Path) -> Result<ExtractedText> {
        let file = File::open(path).map_err(|e| IngestError::parse(path, e))?;
        let mut archive = zip::ZipArchive::new(file)
            .map_err(|e| IngestError::parse(path, format!("not a DOCX container: {}", e)))?;

        let mut xml = String::new();
        archive
            .by_name(DOCUMENT_PART)
            .map_err(|e| IngestError::parse(path, format!("missing {}: {}", DOCUMENT_PART, e)))?
            .read_to_string(&mut xml)
            .map_err(|e| IngestError::parse(path, e))?;

        let text = paragraphs_from_xml(&xml)
            .map_err(|e| IngestError::parse(path, e))?
            .join("\n");

        Ok(ExtractedText::single(text))
    }
}

/// Collect the text of every non-blank paragraph in a WordprocessingML body
fn paragraphs_from_xml(xml: &str) -> std::result::Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text = false;
    // Tab stops in paragraph properties are also `w:tab`; only runs carry text
    let mut run_depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"p" => current.clear(),
                b"r" => run_depth += 1,
                b"t" => in_text = true,
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"p" => {
                    if !current.trim().is_empty() {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                    current.clear();
                }
                b"r" => run_depth = run_depth.saturating_sub(1),
                b"t" => in_text = false,
                _ => {}
            },
            Event::Empty(e) if run_depth > 0 => match e.local_name().as_ref() {
                b"tab" => current.push('\t'),
                b"br" | b"cr" => current.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text => current.push_str(&t.unescape()?),
            Event::CData(t) if in_text => current.push_str(&String::from_utf8_lossy(&t)),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}
