//! Statement document rendering.

mod extractor;

pub use extractor::{StatementRenderer, render_statement};

use crate::error::PdfError;

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for turning an uploaded statement document into linear text.
///
/// The downstream contract is a single string: the concatenation of all
/// page text, possibly empty. Classification and extraction tolerate an
/// empty string (unknown issuer, sentinel fields), so a text layer that
/// renders to nothing is not an error at this layer.
pub trait TextRenderer {
    /// Load a document from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Number of pages in the loaded document.
    fn page_count(&self) -> u32;

    /// Extract the text layer of the whole document.
    fn render_text(&self) -> Result<String>;
}
