//! Statement text rendering using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::{Result, TextRenderer};
use crate::error::PdfError;

/// Renders statement PDFs to linear text.
///
/// lopdf handles structural validation (encryption, page count); the text
/// layer itself comes from pdf-extract over the raw bytes.
pub struct StatementRenderer {
    document: Option<Document>,
    raw_data: Vec<u8>,
    max_pages: u32,
}

impl StatementRenderer {
    /// Create a new renderer with no page limit.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
            max_pages: 0,
        }
    }

    /// Cap the number of pages accepted per document (0 = unlimited).
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }
}

impl Default for StatementRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRenderer for StatementRenderer {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("decrypted PDF with empty password");

            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len() as u32;
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }
        if self.max_pages > 0 && page_count > self.max_pages {
            return Err(PdfError::TooManyPages(page_count, self.max_pages));
        }

        debug!("loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn render_text(&self) -> Result<String> {
        if self.document.is_none() {
            return Err(PdfError::Parse("no document loaded".to_string()));
        }

        let text = pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
        Ok(text)
    }
}

/// Render a statement document to text in one call.
pub fn render_statement(data: &[u8]) -> Result<String> {
    let mut renderer = StatementRenderer::new();
    renderer.load(data)?;
    renderer.render_text()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unloaded_renderer_has_no_pages() {
        let renderer = StatementRenderer::new();
        assert_eq!(renderer.page_count(), 0);
        assert!(renderer.render_text().is_err());
    }

    #[test]
    fn test_garbage_bytes_fail_to_parse() {
        let mut renderer = StatementRenderer::new();
        let result = renderer.load(b"not a pdf at all");
        assert!(matches!(result, Err(PdfError::Parse(_))));
    }
}
