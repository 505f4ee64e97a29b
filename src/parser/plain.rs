use super::{ExtractedText, Extractor};
use crate::error::{IngestError, Result};
use std::path::Path;

/// Reads a UTF-8 text file verbatim
pub struct TextExtractor;

impl Extractor for TextExtractor {
    fn extract(&self, path: &Path) -> Result<ExtractedText> {
        let bytes = std::fs::read(path).map_err(|e| IngestError::parse(path, e))?;
        let text = String::from_utf8(bytes)
            .map_err(|e| IngestError::parse(path, format!("not valid UTF-8: {}", e.utf8_error())))?;

        Ok(ExtractedText::single(text))
    }
}
